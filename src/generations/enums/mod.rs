pub mod generation_job_status;
pub mod pose;
