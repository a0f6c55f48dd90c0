use hickory_proto::rr::{Record, RecordType};

/// NSEC, NSEC3, DS, RRSIG and SIG carry DNSSEC material and are withheld
/// from clients that did not opt into DNSSEC.
///
/// DNSKEY is deliberately absent: a client receiving one asked for it.
#[inline]
pub fn is_dnssec_type(record_type: RecordType) -> bool {
    matches!(
        record_type,
        RecordType::NSEC
            | RecordType::NSEC3
            | RecordType::DS
            | RecordType::RRSIG
            | RecordType::SIG
    )
}

#[inline]
pub fn is_dnssec_record(record: &Record) -> bool {
    is_dnssec_type(record.record_type())
}

/// OPT pseudo-records are negotiated per hop and must never be replayed
/// from cache.
#[inline]
pub fn is_hop_by_hop(record: &Record) -> bool {
    record.record_type() == RecordType::OPT
}
