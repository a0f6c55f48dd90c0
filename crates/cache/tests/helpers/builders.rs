#![allow(dead_code)]
use chrono::{DateTime, TimeZone, Utc};
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record, RecordType};
use std::net::Ipv4Addr;

pub const ZONE: &str = "example.com.";

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Parsed as ASCII so the caller's letter case survives.
pub fn name(domain: &str) -> Name {
    Name::from_ascii(domain).unwrap()
}

pub fn a_record(domain: &str, ttl: u32, octets: [u8; 4]) -> Record {
    Record::from_rdata(name(domain), ttl, RData::A(A(Ipv4Addr::from(octets))))
}

/// A header-only record; the cache never inspects rdata.
pub fn typed_record(domain: &str, record_type: RecordType, ttl: u32) -> Record {
    Record::with(name(domain), record_type, ttl)
}

pub fn opt_record() -> Record {
    Record::with(Name::root(), RecordType::OPT, 0)
}

pub fn query(domain: &str, record_type: RecordType) -> Message {
    let mut message = Message::new();
    message
        .set_id(0x1234)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(name(domain), record_type));
    message
}

pub struct ResponseBuilder {
    message: Message,
}

impl ResponseBuilder {
    pub fn new(domain: &str, record_type: RecordType) -> Self {
        let mut message = query(domain, record_type);
        message
            .set_message_type(MessageType::Response)
            .set_recursion_available(true)
            .set_response_code(ResponseCode::NoError);
        Self { message }
    }

    pub fn rcode(mut self, rcode: ResponseCode) -> Self {
        self.message.set_response_code(rcode);
        self
    }

    pub fn authentic_data(mut self, ad: bool) -> Self {
        self.message.set_authentic_data(ad);
        self
    }

    pub fn recursion_available(mut self, ra: bool) -> Self {
        self.message.set_recursion_available(ra);
        self
    }

    pub fn answer(mut self, record: Record) -> Self {
        self.message.add_answer(record);
        self
    }

    pub fn authority(mut self, record: Record) -> Self {
        self.message.add_name_server(record);
        self
    }

    pub fn additional(mut self, record: Record) -> Self {
        self.message.add_additional(record);
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}
