use super::*;

#[test]
fn token_key_is_stable() {
    // The backend contract stores the credential under this exact key.
    assert_eq!(TOKEN_KEY, "token");
}

#[test]
fn browser_tokens_are_inert_without_a_browser() {
    let store = BrowserTokens;
    store.save("tok123");
    assert_eq!(store.load(), None);
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn memory_tokens_round_trip() {
    let store = MemoryTokens::default();
    assert_eq!(store.load(), None);
    store.save("tok123");
    assert_eq!(store.load(), Some("tok123".to_owned()));
    store.save("tok456");
    assert_eq!(store.load(), Some("tok456".to_owned()));
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn memory_tokens_clones_share_the_slot() {
    let store = MemoryTokens::default();
    let alias = store.clone();
    store.save("tok123");
    assert_eq!(alias.load(), Some("tok123".to_owned()));
}
