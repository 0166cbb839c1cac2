mod audio_payload_test;
mod job_status_test;
