use scribe::{Accessor, Encoding, Error, MemoryStore, Payload, Store};
use std::{cell::Cell, fmt};

#[derive(Debug)]
struct QuotaExceeded;

impl fmt::Display for QuotaExceeded {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("QuotaExceededError")
    }
}

impl std::error::Error for QuotaExceeded {}

/// a store that accepts a fixed number of writes and counts every call
#[derive(Default)]
struct Limited {
    inner: MemoryStore,
    remaining: usize,
    gets: Cell<usize>,
}

impl Limited {
    fn with_quota(remaining: usize) -> Self {
        Self {
            remaining,
            ..Default::default()
        }
    }
}

impl Store for Limited {
    type Error = QuotaExceeded;

    fn set(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        if self.remaining == 0 {
            return Err(QuotaExceeded);
        }
        self.remaining -= 1;
        self.inner.set(name, value).map_err(|e| match e {})
    }

    fn get(&self, name: &str) -> Result<Option<String>, Self::Error> {
        self.gets.set(self.gets.get() + 1);
        self.inner.get(name).map_err(|e| match e {})
    }
}

/// a store whose lookups of one name always fail
#[derive(Default)]
struct Poisoned {
    inner: MemoryStore,
}

impl Poisoned {
    const NAME: &'static str = "poisoned";
}

impl Store for Poisoned {
    type Error = QuotaExceeded;

    fn set(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        self.inner.set(name, value).map_err(|e| match e {})
    }

    fn get(&self, name: &str) -> Result<Option<String>, Self::Error> {
        if name == Self::NAME {
            return Err(QuotaExceeded);
        }
        self.inner.get(name).map_err(|e| match e {})
    }
}

#[test_log::test]
fn test_bytes_round_trip() {
    let mut a = Accessor::new(MemoryStore::new());
    let cases = [
        Vec::new(),
        vec![0u8],
        hex::decode("deadbeef00ff").unwrap(),
        (0..=255).collect::<Vec<u8>>(),
    ];
    for (i, data) in cases.iter().enumerate() {
        let name = format!("case{i}");
        a.write_bytes(&name, data).unwrap();
        assert_eq!(&a.read_bytes(&name).unwrap(), data);
    }
    assert_eq!(a.store().raw("case0"), Some("[]"));
    assert_eq!(a.store().raw("case2"), Some("[222,173,190,239,0,255]"));
}

#[test_log::test]
fn test_text_round_trip() {
    let mut a = Accessor::new(MemoryStore::new());
    for s in ["", "hello", "{\"not\": \"parsed\"}", "ünïcødé ✓"] {
        a.write_text("t", s).unwrap();
        assert_eq!(a.read_text("t").unwrap().as_deref(), Some(s));
        assert_eq!(a.store().raw("t"), Some(s));
    }
}

#[test_log::test]
fn test_overwrite() {
    let mut a = Accessor::new(MemoryStore::new());
    a.write_bytes("n", &[1]).unwrap();
    a.write_bytes("n", &[2, 2]).unwrap();
    assert_eq!(a.read_bytes("n").unwrap(), vec![2, 2]);
    assert_eq!(a.store().len(), 1);
}

#[test_log::test]
fn test_exists_before_and_after() {
    let mut a = Accessor::new(MemoryStore::new());
    assert!(!a.check_exists("n").unwrap());
    a.write_bytes("n", &[]).unwrap();
    assert!(a.check_exists("n").unwrap());
    assert!(!a.check_exists("missing").unwrap());
}

#[test_log::test]
fn test_missing_bytes_is_not_found() {
    let a = Accessor::new(MemoryStore::new());
    match a.read_bytes("never") {
        Err(Error::NotFound(name)) => assert_eq!(name, "never"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test_log::test]
fn test_text_read_as_bytes_fails_to_decode() {
    let mut a = Accessor::new(MemoryStore::new());
    a.write_text("k", "hello").unwrap();
    assert!(matches!(a.read_bytes("k"), Err(Error::Decode(_))));
    // the text accessor still sees it
    assert_eq!(
        a.read_info("k", Encoding::Text).unwrap(),
        Some(Payload::Text("hello".to_string()))
    );
}

#[test_log::test]
fn test_store_error_passes_through() {
    let mut a = Accessor::new(Limited::with_quota(1));
    a.write_bytes("first", &[1]).unwrap();
    let err = a.write_bytes("second", &[2]).unwrap_err();
    assert!(matches!(err, Error::Store(QuotaExceeded)));
    assert_eq!(err.to_string(), "QuotaExceededError");
    assert!(!a.check_exists("second").unwrap());
}

#[test_log::test]
fn test_single_call_per_operation() {
    let mut a = Accessor::new(Limited::with_quota(8));
    a.write_text("k", "v").unwrap();
    assert_eq!(a.store().gets.get(), 0);
    a.read_text("k").unwrap();
    a.check_exists("k").unwrap();
    assert_eq!(a.store().gets.get(), 2);
}

#[test_log::test]
fn test_shared_store_visible_to_other_accessor() {
    let mut store = MemoryStore::new();
    {
        let mut writer = Accessor::new(&mut store);
        writer.write_bytes("shared", &[7, 7]).unwrap();
    }
    let reader = Accessor::new(store);
    assert_eq!(reader.read_bytes("shared").unwrap(), vec![7, 7]);
}

#[test_log::test]
fn test_store_read_error_passes_through() {
    let mut a = Accessor::new(Poisoned::default());
    a.write_bytes(Poisoned::NAME, &[1]).unwrap();
    a.write_bytes("fine", &[1]).unwrap();

    assert!(matches!(
        a.read_bytes(Poisoned::NAME),
        Err(Error::Store(QuotaExceeded))
    ));
    assert!(matches!(
        a.read_text(Poisoned::NAME),
        Err(Error::Store(QuotaExceeded))
    ));
    assert!(matches!(
        a.check_exists(Poisoned::NAME),
        Err(Error::Store(QuotaExceeded))
    ));
    assert!(matches!(
        a.read_info(Poisoned::NAME, Encoding::Text),
        Err(Error::Store(QuotaExceeded))
    ));
    assert_eq!(a.read_bytes("fine").unwrap(), vec![1]);
}
