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

use crate::Result;
use crate::errors::DISPATCHER;
use crate::model;
use gax::options::RequestOptions;
use gax::response::Response;
use gaxi::http::ReqwestClient;
use gaxi::operation::OperationDescriptor;
use gaxi::transport::XmlHandler;

const API_VERSION: &str = "2011-01-01";

static DESCRIBE_AUTO_SCALING_GROUPS: OperationDescriptor =
    OperationDescriptor::query("DescribeAutoScalingGroups", API_VERSION);
static CREATE_LAUNCH_CONFIGURATION: OperationDescriptor =
    OperationDescriptor::query("CreateLaunchConfiguration", API_VERSION);

#[derive(Clone, Debug)]
pub(crate) struct AutoScaling {
    inner: gaxi::client::Client<ReqwestClient>,
}

impl AutoScaling {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let transport = ReqwestClient::new(config.clone(), crate::DEFAULT_HOST)
            .await?
            .with_api_client_header(crate::info::API_CLIENT_HEADER.as_str());
        let inner = gaxi::client::Client::new(transport, &config);
        Ok(Self { inner })
    }

    pub async fn describe_auto_scaling_groups(
        &self,
        req: model::DescribeAutoScalingGroupsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::DescribeAutoScalingGroupsResponse>> {
        self.inner
            .call(
                &DESCRIBE_AUTO_SCALING_GROUPS,
                &DISPATCHER,
                Some(&req),
                XmlHandler::with_wrapper("DescribeAutoScalingGroupsResult"),
                options,
            )
            .await
    }

    pub async fn create_launch_configuration(
        &self,
        req: model::CreateLaunchConfigurationRequest,
        options: RequestOptions,
    ) -> Result<Response<model::CreateLaunchConfigurationResponse>> {
        self.inner
            .call(
                &CREATE_LAUNCH_CONFIGURATION,
                &DISPATCHER,
                Some(&req),
                XmlHandler::with_wrapper("CreateLaunchConfigurationResult"),
                options,
            )
            .await
    }
}
