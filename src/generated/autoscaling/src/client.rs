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

use std::sync::Arc;

/// Implements a client for the compute autoscaling API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use cloudsdk_autoscaling::client::AutoScaling;
/// let client = AutoScaling::builder().build().await?;
/// let response = client
///     .describe_auto_scaling_groups()
///     .set_auto_scaling_group_names(["web", "batch"])
///     .send()
///     .await?;
/// for group in response.auto_scaling_groups.unwrap_or_default() {
///     println!("{group:?}");
/// }
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Auto Scaling groups launch and terminate compute instances to keep the
/// number of running instances between a minimum and a maximum size. Launch
/// configurations are templates describing the instances to launch.
///
/// # Configuration
///
/// To configure `AutoScaling` use the `with_*` methods in the type returned
/// by [builder()][AutoScaling::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://autoscaling.us-east-1.amazonaws.com`). Applications using
///   regional endpoints or running in restricted networks may want to
///   override this default.
///
/// [with_endpoint()]: super::builder::auto_scaling::ClientBuilder::with_endpoint
///
/// # Pooling and Cloning
///
/// `AutoScaling` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `AutoScaling` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct AutoScaling {
    inner: Arc<crate::transport::AutoScaling>,
}

impl AutoScaling {
    /// Returns a builder for [AutoScaling].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloudsdk_autoscaling::client::AutoScaling;
    /// let client = AutoScaling::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::auto_scaling::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::auto_scaling::client::Factory)
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = crate::transport::AutoScaling::new(config).await?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Gets information about the Auto Scaling groups in the account and
    /// region.
    ///
    /// If more groups are available, the response includes a `next_token`.
    /// Send it back in the next request to get the remaining groups.
    pub fn describe_auto_scaling_groups(
        &self,
    ) -> super::builder::auto_scaling::DescribeAutoScalingGroups {
        super::builder::auto_scaling::DescribeAutoScalingGroups::new(self.inner.clone())
    }

    /// Creates a launch configuration.
    ///
    /// Launch configurations cannot be modified after they are created.
    pub fn create_launch_configuration(
        &self,
    ) -> super::builder::auto_scaling::CreateLaunchConfiguration {
        super::builder::auto_scaling::CreateLaunchConfiguration::new(self.inner.clone())
    }
}
