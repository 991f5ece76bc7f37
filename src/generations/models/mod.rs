pub mod generation_job;
