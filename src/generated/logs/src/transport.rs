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
use gaxi::transport::JsonHandler;

const API_VERSION: &str = "2014-03-28";
const TARGET_PREFIX: &str = "Logs_20140328";
const JSON_VERSION: &str = "1.1";

static GET_LOG_EVENTS: OperationDescriptor =
    OperationDescriptor::json("GetLogEvents", API_VERSION, JSON_VERSION, TARGET_PREFIX);
static PUT_LOG_EVENTS: OperationDescriptor =
    OperationDescriptor::json("PutLogEvents", API_VERSION, JSON_VERSION, TARGET_PREFIX);

#[derive(Clone, Debug)]
pub(crate) struct Logs {
    inner: gaxi::client::Client<ReqwestClient>,
}

impl Logs {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let transport = ReqwestClient::new(config.clone(), crate::DEFAULT_HOST)
            .await?
            .with_api_client_header(crate::info::API_CLIENT_HEADER.as_str());
        let inner = gaxi::client::Client::new(transport, &config);
        Ok(Self { inner })
    }

    pub async fn get_log_events(
        &self,
        req: model::GetLogEventsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetLogEventsResponse>> {
        self.inner
            .call(
                &GET_LOG_EVENTS,
                &DISPATCHER,
                Some(&req),
                JsonHandler::new(),
                options,
            )
            .await
    }

    pub async fn put_log_events(
        &self,
        req: model::PutLogEventsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PutLogEventsResponse>> {
        self.inner
            .call(
                &PUT_LOG_EVENTS,
                &DISPATCHER,
                Some(&req),
                JsonHandler::new(),
                options,
            )
            .await
    }
}
