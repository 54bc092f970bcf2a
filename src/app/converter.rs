use std::sync::Arc;

use tracing::error;

use crate::convert::{decode_record, decode_record_events};
use crate::error::{Error, Res};
use crate::model::*;
use crate::util::dictionary::Dictionary;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

// [RecordSource]
// 牌譜IDから ResGameRecord のバイト列を取得する. 取得の失敗はリトライしない
pub trait RecordSource {
    fn fetch_raw_record(&self, id: &str) -> Result<Vec<u8>, BoxError>;
}

// [Converter]
#[derive(Debug)]
pub struct Converter<S> {
    source: S,
    dict: Arc<Dictionary>,
}

impl<S: RecordSource> Converter<S> {
    pub fn new(source: S, dict: Arc<Dictionary>) -> Self {
        Self { source, dict }
    }

    fn fetch(&self, id: &str) -> Res<Vec<u8>> {
        self.source.fetch_raw_record(id).map_err(Error::Retrieval)
    }

    pub fn try_convert(&self, id: &str) -> Res<ReplayLog> {
        decode_record(&self.fetch(id)?, &self.dict)
    }

    // 失敗の場合は {is_error: true, log: null}
    pub fn convert(&self, id: &str) -> ConvertResponse {
        match self.try_convert(id) {
            Ok(log) => ConvertResponse::ok(log),
            Err(e) => {
                error!("convert failed: id={}, {}", id, e);
                ConvertResponse::error()
            }
        }
    }

    pub fn events(&self, id: &str) -> Res<Vec<RoundEvent>> {
        decode_record_events(&self.fetch(id)?, &self.dict)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;
    use crate::util::test::*;

    struct MemorySource(HashMap<String, Vec<u8>>);

    impl RecordSource for MemorySource {
        fn fetch_raw_record(&self, id: &str) -> Result<Vec<u8>, BoxError> {
            self.0
                .get(id)
                .cloned()
                .ok_or_else(|| format!("record not found: {}", id).into())
        }
    }

    fn converter() -> Converter<MemorySource> {
        let mut records = HashMap::new();
        records.insert(UUID_4P.to_string(), record_4p());
        records.insert("denied".to_string(), upstream_error(1203));
        records.insert("broken".to_string(), vec![0xff, 0xff]);
        Converter::new(MemorySource(records), Arc::new(Dictionary::builtin()))
    }

    #[test]
    fn convert_success() {
        let res = converter().convert(UUID_4P);
        assert!(!res.is_error);
        let log = res.log.unwrap();
        assert_eq!(log.ref_, UUID_4P);
        assert_eq!(log.log.len(), 2);
    }

    #[test]
    fn upstream_error_envelope() {
        let res = converter().convert("denied");
        assert_eq!(
            serde_json::to_value(&res).unwrap(),
            json!({"is_error": true, "log": null})
        );
        assert_eq!(converter().convert("broken"), ConvertResponse::error());
    }

    #[test]
    fn retrieval_error_is_propagated() {
        let c = converter();
        match c.try_convert("missing") {
            Err(Error::Retrieval(e)) => assert_eq!(e.to_string(), "record not found: missing"),
            r => panic!("unexpected: {:?}", r),
        }
        assert_eq!(c.convert("missing"), ConvertResponse::error());
    }

    #[test]
    fn events_of_record() {
        let evs = converter().events(UUID_4P).unwrap();
        assert_eq!(evs.len(), 9);
        assert!(matches!(evs[0], RoundEvent::RoundStart(_)));
    }
}
