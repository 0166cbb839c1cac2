mod detail_sanitizer_test;
