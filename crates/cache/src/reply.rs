use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};

/// Builds an empty reply addressed to `query`.
///
/// Copies the ID and op code. Standard queries also get their RD and CD bits
/// mirrored. Only the first question is echoed back.
pub fn reply_for(query: &Message) -> Message {
    let mut reply = Message::new();
    reply
        .set_id(query.id())
        .set_message_type(MessageType::Response)
        .set_op_code(query.op_code())
        .set_response_code(ResponseCode::NoError);

    if query.op_code() == OpCode::Query {
        reply
            .set_recursion_desired(query.recursion_desired())
            .set_checking_disabled(query.checking_disabled());
    }

    if let Some(question) = query.queries().first() {
        reply.add_query(question.clone());
    }

    reply
}

/// Whether the client set the EDNS DNSSEC OK bit on `query`.
pub fn dnssec_ok(query: &Message) -> bool {
    query
        .extensions()
        .as_ref()
        .is_some_and(|edns| edns.dnssec_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::op::{Edns, Query};
    use hickory_proto::rr::{Name, RecordType};
    use std::str::FromStr;

    fn query_message(id: u16) -> Message {
        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true)
            .set_checking_disabled(true);
        message.add_query(Query::query(
            Name::from_str("example.com.").unwrap(),
            RecordType::A,
        ));
        message
    }

    #[test]
    fn test_reply_mirrors_query_header() {
        let query = query_message(4242);
        let reply = reply_for(&query);

        assert_eq!(reply.id(), 4242);
        assert_eq!(reply.message_type(), MessageType::Response);
        assert_eq!(reply.op_code(), OpCode::Query);
        assert_eq!(reply.response_code(), ResponseCode::NoError);
        assert!(reply.recursion_desired());
        assert!(reply.checking_disabled());
        assert!(!reply.authoritative());
        assert!(reply.answers().is_empty());
    }

    #[test]
    fn test_reply_echoes_only_first_question() {
        let mut query = query_message(1);
        query.add_query(Query::query(
            Name::from_str("other.example.").unwrap(),
            RecordType::AAAA,
        ));

        let reply = reply_for(&query);

        assert_eq!(reply.queries().len(), 1);
        assert_eq!(reply.queries()[0].query_type(), RecordType::A);
    }

    #[test]
    fn test_reply_without_question() {
        let mut query = Message::new();
        query.set_id(7);

        let reply = reply_for(&query);
        assert!(reply.queries().is_empty());
        assert_eq!(reply.id(), 7);
    }

    #[test]
    fn test_non_query_opcode_does_not_copy_rd_cd() {
        let mut query = query_message(9);
        query.set_op_code(OpCode::Notify);

        let reply = reply_for(&query);
        assert_eq!(reply.op_code(), OpCode::Notify);
        assert!(!reply.recursion_desired());
        assert!(!reply.checking_disabled());
    }

    #[test]
    fn test_dnssec_ok_reads_edns_do_bit() {
        let mut query = query_message(1);
        assert!(!dnssec_ok(&query), "no EDNS means no DO bit");

        let mut edns = Edns::new();
        edns.set_dnssec_ok(false);
        query.set_edns(edns.clone());
        assert!(!dnssec_ok(&query));

        edns.set_dnssec_ok(true);
        query.set_edns(edns);
        assert!(dnssec_ok(&query));
    }
}
