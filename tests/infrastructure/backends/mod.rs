mod sync_inference_backend_test;
