use crate::dnssec::{is_dnssec_record, is_hop_by_hop};
use crate::freq::Freq;
use crate::reply::reply_for;
use chrono::{DateTime, TimeZone, Utc};
use hickory_proto::op::{Message, Query, ResponseCode};
use hickory_proto::rr::Record;
use std::time::Duration;
use tracing::{debug, trace};

/// The reusable part of one upstream DNS response.
///
/// Built once when a response is stored and read, never mutated, on every
/// hit. The TTL budget and capture time are fixed at construction; only the
/// remaining TTL computed from them changes with the caller's clock.
#[derive(Debug)]
pub struct CacheEntry {
    response_code: ResponseCode,
    authenticated_data: bool,
    recursion_available: bool,
    answers: Vec<Record>,
    authorities: Vec<Record>,
    /// Never contains OPT records.
    additionals: Vec<Record>,
    question: Option<Query>,
    original_ttl: u32,
    stored_at: DateTime<Utc>,
    /// Owned and mutated only by the eviction component.
    freq: Freq,
}

impl CacheEntry {
    /// Captures `response` as it stands at `now`, fresh for `ttl`.
    ///
    /// OPT records in the additional section are dropped. `ttl` is floored to
    /// whole seconds and saturates at `u32::MAX`.
    pub fn new<Tz: TimeZone>(response: &Message, now: DateTime<Tz>, ttl: Duration) -> Self {
        let additionals: Vec<Record> = response
            .additionals()
            .iter()
            .filter(|record| !is_hop_by_hop(record))
            .cloned()
            .collect();
        let original_ttl = u32::try_from(ttl.as_secs()).unwrap_or(u32::MAX);

        debug!(
            rcode = ?response.response_code(),
            answers = response.answers().len(),
            authorities = response.name_servers().len(),
            additionals = additionals.len(),
            stripped_opt = response.additionals().len() - additionals.len(),
            ttl = original_ttl,
            "Cache entry created"
        );

        Self {
            response_code: response.response_code(),
            authenticated_data: response.authentic_data(),
            recursion_available: response.recursion_available(),
            answers: response.answers().to_vec(),
            authorities: response.name_servers().to_vec(),
            additionals,
            question: response.queries().first().cloned(),
            original_ttl,
            stored_at: now.with_timezone(&Utc),
            freq: Freq::new(),
        }
    }

    /// Seconds of freshness left at `now`.
    ///
    /// Goes to zero and below once the entry outlives its TTL; deciding what
    /// to do with such an entry is up to the caller.
    pub fn remaining_ttl<Tz: TimeZone>(&self, now: DateTime<Tz>) -> i64 {
        let elapsed = now
            .with_timezone(&Utc)
            .signed_duration_since(self.stored_at)
            .num_seconds();
        i64::from(self.original_ttl) - elapsed
    }

    #[inline]
    pub fn is_expired<Tz: TimeZone>(&self, now: DateTime<Tz>) -> bool {
        self.remaining_ttl(now) <= 0
    }

    /// Renders a reply to `query` from this entry.
    ///
    /// Every record carries the remaining TTL at `now` in place of its own.
    /// When `dnssec_desired` is false, DNSSEC records are left out of all
    /// sections and the AD bit is cleared.
    pub fn render<Tz: TimeZone>(
        &self,
        query: &Message,
        now: DateTime<Tz>,
        dnssec_desired: bool,
    ) -> Message {
        let mut reply = reply_for(query);

        // AA should be clear on a cached answer, but stub resolvers built on
        // older glibc getaddrinfo discard non-authoritative replies outright.
        reply
            .set_authoritative(true)
            .set_authentic_data(self.authenticated_data && dnssec_desired)
            .set_recursion_available(self.recursion_available)
            .set_response_code(self.response_code);

        let remaining = self.remaining_ttl(now);
        let ttl = wire_ttl(remaining);

        let answers = copy_section(&self.answers, ttl, dnssec_desired);
        let authorities = copy_section(&self.authorities, ttl, dnssec_desired);
        let additionals = copy_section(&self.additionals, ttl, dnssec_desired);

        trace!(
            remaining_ttl = remaining,
            dnssec_desired,
            suppressed = self.record_count()
                - answers.len()
                - authorities.len()
                - additionals.len(),
            "Rendering cached answer"
        );

        reply.insert_answers(answers);
        reply.insert_name_servers(authorities);
        reply.insert_additionals(additionals);
        reply
    }

    /// Whether `query` asks the question this entry was stored for.
    ///
    /// Guards against fingerprint collisions in the owning map. Names compare
    /// case-insensitively.
    pub fn matches(&self, query: &Message) -> bool {
        match (self.question.as_ref(), query.queries().first()) {
            (Some(stored), Some(asked)) => {
                stored.query_type() == asked.query_type()
                    && stored.query_class() == asked.query_class()
                    && stored.name() == asked.name()
            }
            (None, None) => true,
            _ => false,
        }
    }

    pub fn response_code(&self) -> ResponseCode {
        self.response_code
    }

    pub fn authenticated_data(&self) -> bool {
        self.authenticated_data
    }

    pub fn recursion_available(&self) -> bool {
        self.recursion_available
    }

    pub fn answers(&self) -> &[Record] {
        &self.answers
    }

    pub fn authorities(&self) -> &[Record] {
        &self.authorities
    }

    pub fn additionals(&self) -> &[Record] {
        &self.additionals
    }

    pub fn question(&self) -> Option<&Query> {
        self.question.as_ref()
    }

    pub fn original_ttl(&self) -> u32 {
        self.original_ttl
    }

    pub fn stored_at(&self) -> DateTime<Utc> {
        self.stored_at
    }

    pub fn freq(&self) -> &Freq {
        &self.freq
    }

    fn record_count(&self) -> usize {
        self.answers.len() + self.authorities.len() + self.additionals.len()
    }
}

/// Record TTLs are unsigned on the wire: an expired entry goes out with 0.
#[inline]
fn wire_ttl(remaining: i64) -> u32 {
    u32::try_from(remaining.max(0)).unwrap_or(u32::MAX)
}

fn copy_section(records: &[Record], ttl: u32, dnssec_desired: bool) -> Vec<Record> {
    records
        .iter()
        .filter(|record| dnssec_desired || !is_dnssec_record(record))
        .map(|record| {
            let mut copy = record.clone();
            copy.set_ttl(ttl);
            copy
        })
        .collect()
}
