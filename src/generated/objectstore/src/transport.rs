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
use gaxi::transport::{HeadersHandler, StreamingHandler, XmlHandler};
use http::Method;

const API_VERSION: &str = "2006-03-01";
const XML_NAMESPACE: &str = "http://s3.amazonaws.com/doc/2006-03-01/";

static LIST_OBJECTS_V2: OperationDescriptor = OperationDescriptor::rest_xml(
    "ListObjectsV2",
    API_VERSION,
    Method::GET,
    "/{Bucket}?list-type=2&prefix={Prefix}&delimiter={Delimiter}&max-keys={MaxKeys}&continuation-token={ContinuationToken}&start-after={StartAfter}",
);
static GET_OBJECT: OperationDescriptor =
    OperationDescriptor::rest_xml("GetObject", API_VERSION, Method::GET, "/{Bucket}/{Key+}");
static HEAD_OBJECT: OperationDescriptor =
    OperationDescriptor::rest_xml("HeadObject", API_VERSION, Method::HEAD, "/{Bucket}/{Key+}");
static PUT_OBJECT: OperationDescriptor =
    OperationDescriptor::rest_xml("PutObject", API_VERSION, Method::PUT, "/{Bucket}/{Key+}");
static PUT_BUCKET_TAGGING: OperationDescriptor = OperationDescriptor::rest_xml(
    "PutBucketTagging",
    API_VERSION,
    Method::PUT,
    "/{Bucket}?tagging",
)
.with_xml_namespace(XML_NAMESPACE);

#[derive(Clone, Debug)]
pub(crate) struct ObjectStore {
    inner: gaxi::client::Client<ReqwestClient>,
}

impl ObjectStore {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let transport = ReqwestClient::new(config.clone(), crate::DEFAULT_HOST)
            .await?
            .with_api_client_header(crate::info::API_CLIENT_HEADER.as_str());
        let inner = gaxi::client::Client::new(transport, &config);
        Ok(Self { inner })
    }

    pub async fn list_objects_v2(
        &self,
        req: model::ListObjectsV2Request,
        options: RequestOptions,
    ) -> Result<Response<model::ListObjectsV2Response>> {
        self.inner
            .call(
                &LIST_OBJECTS_V2,
                &DISPATCHER,
                Some(&req),
                XmlHandler::new(),
                options,
            )
            .await
    }

    pub async fn get_object(
        &self,
        req: model::GetObjectRequest,
        options: RequestOptions,
    ) -> Result<Response<model::GetObjectResponse>> {
        self.inner
            .call(
                &GET_OBJECT,
                &DISPATCHER,
                Some(&req),
                StreamingHandler::new(),
                options,
            )
            .await
    }

    pub async fn head_object(
        &self,
        req: model::HeadObjectRequest,
        options: RequestOptions,
    ) -> Result<Response<model::HeadObjectResponse>> {
        self.inner
            .call(
                &HEAD_OBJECT,
                &DISPATCHER,
                Some(&req),
                HeadersHandler::new(),
                options,
            )
            .await
    }

    pub async fn put_object(
        &self,
        req: model::PutObjectRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PutObjectResponse>> {
        self.inner
            .call(
                &PUT_OBJECT,
                &DISPATCHER,
                Some(&req),
                HeadersHandler::new(),
                options,
            )
            .await
    }

    pub async fn put_bucket_tagging(
        &self,
        req: model::PutBucketTaggingRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PutBucketTaggingResponse>> {
        self.inner
            .call(
                &PUT_BUCKET_TAGGING,
                &DISPATCHER,
                Some(&req),
                HeadersHandler::new(),
                options,
            )
            .await
    }
}
