use voicegate::application::ports::CacheStrategy;

#[test]
fn given_strategy_names_when_parsed_then_each_maps_to_its_variant() {
    assert_eq!(
        "cache-first".parse::<CacheStrategy>().unwrap(),
        CacheStrategy::CacheFirst
    );
    assert_eq!(
        "network-first".parse::<CacheStrategy>().unwrap(),
        CacheStrategy::NetworkFirst
    );
    assert_eq!(
        "cache-only".parse::<CacheStrategy>().unwrap(),
        CacheStrategy::CacheOnly
    );
}

#[test]
fn given_unknown_strategy_name_when_parsed_then_error() {
    assert!("stale-while-revalidate".parse::<CacheStrategy>().is_err());
}
