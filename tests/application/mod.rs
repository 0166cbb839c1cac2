mod asset_cache_test;
mod error_classifier_test;
