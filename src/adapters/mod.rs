pub mod descriptor_file;
pub mod github_tag_client;
pub mod stderr_diagnostics;
