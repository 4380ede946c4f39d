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

use gaxi::json::{JsonContext, JsonStructure, UnmarshallError};
use gaxi::shape::{Marshall, Member, Structure};
use gaxi::transport::ResponseHeaders;

/// The request message for [Logs::get_log_events][crate::client::Logs::get_log_events].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogEventsRequest {
    /// The name of the log group.
    pub log_group_name: Option<String>,

    /// The name of the log stream.
    pub log_stream_name: Option<String>,

    /// The start of the time range, in milliseconds since the epoch. Events
    /// with an earlier timestamp are not included.
    pub start_time: Option<i64>,

    /// The end of the time range, in milliseconds since the epoch. Events
    /// with a timestamp equal to or later than this time are not included.
    pub end_time: Option<i64>,

    /// The token for the next set of items to return.
    pub next_token: Option<String>,

    /// The maximum number of log events returned.
    pub limit: Option<i32>,

    /// If true, the earliest log events are returned first.
    pub start_from_head: Option<bool>,
}

impl GetLogEventsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [log_group_name][GetLogEventsRequest::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }

    /// Sets the value of [log_stream_name][GetLogEventsRequest::log_stream_name].
    pub fn set_log_stream_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_stream_name = Some(v.into());
        self
    }

    /// Sets the value of [start_time][GetLogEventsRequest::start_time].
    pub fn set_start_time<T: Into<i64>>(mut self, v: T) -> Self {
        self.start_time = Some(v.into());
        self
    }

    /// Sets the value of [end_time][GetLogEventsRequest::end_time].
    pub fn set_end_time<T: Into<i64>>(mut self, v: T) -> Self {
        self.end_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_token][GetLogEventsRequest::next_token].
    pub fn set_or_clear_next_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_token = v.map(Into::into);
        self
    }

    /// Sets the value of [next_token][GetLogEventsRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [limit][GetLogEventsRequest::limit].
    pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [start_from_head][GetLogEventsRequest::start_from_head].
    pub fn set_start_from_head<T: Into<bool>>(mut self, v: T) -> Self {
        self.start_from_head = Some(v.into());
        self
    }
}

impl Marshall for GetLogEventsRequest {
    fn marshall(&self) -> Structure {
        Structure::new()
            .member(Member::body("logGroupName"), &self.log_group_name)
            .member(Member::body("logStreamName"), &self.log_stream_name)
            .member(Member::body("startTime"), &self.start_time)
            .member(Member::body("endTime"), &self.end_time)
            .member(Member::body("nextToken"), &self.next_token)
            .member(Member::body("limit"), &self.limit)
            .member(Member::body("startFromHead"), &self.start_from_head)
    }
}

/// The response message for [Logs::get_log_events][crate::client::Logs::get_log_events].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogEventsResponse {
    /// The events.
    pub events: Option<Vec<OutputLogEvent>>,

    /// The token for the next set of items in the forward direction.
    ///
    /// If you have reached the end of the stream, it returns the same token
    /// you passed in.
    pub next_forward_token: Option<String>,

    /// The token for the next set of items in the backward direction.
    pub next_backward_token: Option<String>,
}

impl GetLogEventsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [events][GetLogEventsResponse::events].
    pub fn set_events<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<OutputLogEvent>,
    {
        self.events = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the value of [next_forward_token][GetLogEventsResponse::next_forward_token].
    pub fn set_next_forward_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_forward_token = Some(v.into());
        self
    }

    /// Sets the value of [next_backward_token][GetLogEventsResponse::next_backward_token].
    pub fn set_next_backward_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_backward_token = Some(v.into());
        self
    }
}

impl JsonStructure for GetLogEventsResponse {
    fn unmarshall_member(&mut self, name: &str, ctx: &mut JsonContext) -> Result<(), UnmarshallError> {
        match name {
            "events" => self.events = ctx.field()?,
            "nextForwardToken" => self.next_forward_token = ctx.field()?,
            "nextBackwardToken" => self.next_backward_token = ctx.field()?,
            _ => {}
        }
        Ok(())
    }
}

impl ResponseHeaders for GetLogEventsResponse {}

/// Represents a log event.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct OutputLogEvent {
    /// The time the event occurred, in milliseconds since the epoch.
    pub timestamp: Option<i64>,

    /// The data contained in the log event.
    pub message: Option<String>,

    /// The time the event was ingested, in milliseconds since the epoch.
    pub ingestion_time: Option<i64>,
}

impl OutputLogEvent {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [timestamp][OutputLogEvent::timestamp].
    pub fn set_timestamp<T: Into<i64>>(mut self, v: T) -> Self {
        self.timestamp = Some(v.into());
        self
    }

    /// Sets the value of [message][OutputLogEvent::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Sets the value of [ingestion_time][OutputLogEvent::ingestion_time].
    pub fn set_ingestion_time<T: Into<i64>>(mut self, v: T) -> Self {
        self.ingestion_time = Some(v.into());
        self
    }
}

impl JsonStructure for OutputLogEvent {
    fn unmarshall_member(&mut self, name: &str, ctx: &mut JsonContext) -> Result<(), UnmarshallError> {
        match name {
            "timestamp" => self.timestamp = ctx.field()?,
            "message" => self.message = ctx.field()?,
            "ingestionTime" => self.ingestion_time = ctx.field()?,
            _ => {}
        }
        Ok(())
    }
}

/// The request message for [Logs::put_log_events][crate::client::Logs::put_log_events].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PutLogEventsRequest {
    /// The name of the log group.
    pub log_group_name: Option<String>,

    /// The name of the log stream.
    pub log_stream_name: Option<String>,

    /// The log events, in chronological order.
    pub log_events: Option<Vec<InputLogEvent>>,

    /// The sequence token obtained from the response of the previous call.
    pub sequence_token: Option<String>,
}

impl PutLogEventsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [log_group_name][PutLogEventsRequest::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }

    /// Sets the value of [log_stream_name][PutLogEventsRequest::log_stream_name].
    pub fn set_log_stream_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_stream_name = Some(v.into());
        self
    }

    /// Sets the value of [log_events][PutLogEventsRequest::log_events].
    pub fn set_log_events<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<InputLogEvent>,
    {
        self.log_events = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets or clears the value of [sequence_token][PutLogEventsRequest::sequence_token].
    pub fn set_or_clear_sequence_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.sequence_token = v.map(Into::into);
        self
    }

    /// Sets the value of [sequence_token][PutLogEventsRequest::sequence_token].
    pub fn set_sequence_token<T: Into<String>>(mut self, v: T) -> Self {
        self.sequence_token = Some(v.into());
        self
    }
}

impl Marshall for PutLogEventsRequest {
    fn marshall(&self) -> Structure {
        Structure::new()
            .member(Member::body("logGroupName"), &self.log_group_name)
            .member(Member::body("logStreamName"), &self.log_stream_name)
            .member(Member::body("logEvents"), &self.log_events)
            .member(Member::body("sequenceToken"), &self.sequence_token)
    }
}

/// A log event to write.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct InputLogEvent {
    /// The time the event occurred, in milliseconds since the epoch.
    pub timestamp: Option<i64>,

    /// The raw event message.
    pub message: Option<String>,
}

impl InputLogEvent {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [timestamp][InputLogEvent::timestamp].
    pub fn set_timestamp<T: Into<i64>>(mut self, v: T) -> Self {
        self.timestamp = Some(v.into());
        self
    }

    /// Sets the value of [message][InputLogEvent::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }
}

impl Marshall for InputLogEvent {
    fn marshall(&self) -> Structure {
        Structure::new()
            .member(Member::body("timestamp"), &self.timestamp)
            .member(Member::body("message"), &self.message)
    }
}

/// The response message for [Logs::put_log_events][crate::client::Logs::put_log_events].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PutLogEventsResponse {
    /// The next sequence token.
    pub next_sequence_token: Option<String>,

    /// The rejected events.
    pub rejected_log_events_info: Option<RejectedLogEventsInfo>,
}

impl PutLogEventsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [next_sequence_token][PutLogEventsResponse::next_sequence_token].
    pub fn set_next_sequence_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_sequence_token = Some(v.into());
        self
    }

    /// Sets the value of [rejected_log_events_info][PutLogEventsResponse::rejected_log_events_info].
    pub fn set_rejected_log_events_info<T: Into<RejectedLogEventsInfo>>(mut self, v: T) -> Self {
        self.rejected_log_events_info = Some(v.into());
        self
    }
}

impl JsonStructure for PutLogEventsResponse {
    fn unmarshall_member(&mut self, name: &str, ctx: &mut JsonContext) -> Result<(), UnmarshallError> {
        match name {
            "nextSequenceToken" => self.next_sequence_token = ctx.field()?,
            "rejectedLogEventsInfo" => self.rejected_log_events_info = ctx.field()?,
            _ => {}
        }
        Ok(())
    }
}

impl ResponseHeaders for PutLogEventsResponse {}

/// Represents the rejected events.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RejectedLogEventsInfo {
    /// The log events that are too new.
    pub too_new_log_event_start_index: Option<i32>,

    /// The log events that are dated too far in the past.
    pub too_old_log_event_end_index: Option<i32>,

    /// The expired log events.
    pub expired_log_event_end_index: Option<i32>,
}

impl RejectedLogEventsInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [too_new_log_event_start_index][RejectedLogEventsInfo::too_new_log_event_start_index].
    pub fn set_too_new_log_event_start_index<T: Into<i32>>(mut self, v: T) -> Self {
        self.too_new_log_event_start_index = Some(v.into());
        self
    }

    /// Sets the value of [too_old_log_event_end_index][RejectedLogEventsInfo::too_old_log_event_end_index].
    pub fn set_too_old_log_event_end_index<T: Into<i32>>(mut self, v: T) -> Self {
        self.too_old_log_event_end_index = Some(v.into());
        self
    }

    /// Sets the value of [expired_log_event_end_index][RejectedLogEventsInfo::expired_log_event_end_index].
    pub fn set_expired_log_event_end_index<T: Into<i32>>(mut self, v: T) -> Self {
        self.expired_log_event_end_index = Some(v.into());
        self
    }
}

impl JsonStructure for RejectedLogEventsInfo {
    fn unmarshall_member(&mut self, name: &str, ctx: &mut JsonContext) -> Result<(), UnmarshallError> {
        match name {
            "tooNewLogEventStartIndex" => self.too_new_log_event_start_index = ctx.field()?,
            "tooOldLogEventEndIndex" => self.too_old_log_event_end_index = ctx.field()?,
            "expiredLogEventEndIndex" => self.expired_log_event_end_index = ctx.field()?,
            _ => {}
        }
        Ok(())
    }
}
