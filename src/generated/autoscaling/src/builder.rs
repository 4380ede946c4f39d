// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub mod auto_scaling {
    use crate::Result;
    use gax::options::RequestOptions;
    use std::sync::Arc;

    /// A builder for [AutoScaling][crate::client::AutoScaling].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloudsdk_autoscaling::*;
    /// # use builder::auto_scaling::ClientBuilder;
    /// # use client::AutoScaling;
    /// let builder: ClientBuilder = AutoScaling::builder();
    /// let client = builder
    ///     .with_endpoint("https://autoscaling.us-west-2.amazonaws.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use super::super::super::client::AutoScaling;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = AutoScaling;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::AutoScaling] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<crate::transport::AutoScaling>,
        request: R,
        options: RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<crate::transport::AutoScaling>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: RequestOptions::default(),
            }
        }
    }

    /// The request builder for [AutoScaling::describe_auto_scaling_groups][crate::client::AutoScaling::describe_auto_scaling_groups] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use cloudsdk_autoscaling::builder;
    /// use builder::auto_scaling::DescribeAutoScalingGroups;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeAutoScalingGroups {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeAutoScalingGroups(
        RequestBuilder<crate::model::DescribeAutoScalingGroupsRequest>,
    );

    impl DescribeAutoScalingGroups {
        pub(crate) fn new(stub: Arc<crate::transport::AutoScaling>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeAutoScalingGroupsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeAutoScalingGroupsResponse> {
            (*self.0.stub)
                .describe_auto_scaling_groups(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [auto_scaling_group_names][crate::model::DescribeAutoScalingGroupsRequest::auto_scaling_group_names].
        pub fn set_auto_scaling_group_names<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.0.request.auto_scaling_group_names = Some(v.into_iter().map(Into::into).collect());
            self
        }

        /// Sets the value of [max_records][crate::model::DescribeAutoScalingGroupsRequest::max_records].
        pub fn set_max_records<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.max_records = Some(v.into());
            self
        }

        /// Sets or clears the value of [next_token][crate::model::DescribeAutoScalingGroupsRequest::next_token].
        pub fn set_or_clear_next_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.next_token = v.map(Into::into);
            self
        }

        /// Sets the value of [next_token][crate::model::DescribeAutoScalingGroupsRequest::next_token].
        pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.next_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeAutoScalingGroups {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AutoScaling::create_launch_configuration][crate::client::AutoScaling::create_launch_configuration] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use cloudsdk_autoscaling::builder;
    /// use builder::auto_scaling::CreateLaunchConfiguration;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateLaunchConfiguration {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateLaunchConfiguration(
        RequestBuilder<crate::model::CreateLaunchConfigurationRequest>,
    );

    impl CreateLaunchConfiguration {
        pub(crate) fn new(stub: Arc<crate::transport::AutoScaling>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateLaunchConfigurationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::CreateLaunchConfigurationResponse> {
            (*self.0.stub)
                .create_launch_configuration(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [launch_configuration_name][crate::model::CreateLaunchConfigurationRequest::launch_configuration_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_launch_configuration_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.launch_configuration_name = Some(v.into());
            self
        }

        /// Sets the value of [image_id][crate::model::CreateLaunchConfigurationRequest::image_id].
        pub fn set_image_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.image_id = Some(v.into());
            self
        }

        /// Sets the value of [key_name][crate::model::CreateLaunchConfigurationRequest::key_name].
        pub fn set_key_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.key_name = Some(v.into());
            self
        }

        /// Sets the value of [security_groups][crate::model::CreateLaunchConfigurationRequest::security_groups].
        pub fn set_security_groups<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.0.request.security_groups = Some(v.into_iter().map(Into::into).collect());
            self
        }

        /// Sets the value of [user_data][crate::model::CreateLaunchConfigurationRequest::user_data].
        pub fn set_user_data<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.user_data = Some(v.into());
            self
        }

        /// Sets the value of [instance_type][crate::model::CreateLaunchConfigurationRequest::instance_type].
        pub fn set_instance_type<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_type = Some(v.into());
            self
        }

        /// Sets the value of [block_device_mappings][crate::model::CreateLaunchConfigurationRequest::block_device_mappings].
        pub fn set_block_device_mappings<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::BlockDeviceMapping>,
        {
            self.0.request.block_device_mappings = Some(v.into_iter().map(Into::into).collect());
            self
        }

        /// Sets the value of [associate_public_ip_address][crate::model::CreateLaunchConfigurationRequest::associate_public_ip_address].
        pub fn set_associate_public_ip_address<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.associate_public_ip_address = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateLaunchConfiguration {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }
}
