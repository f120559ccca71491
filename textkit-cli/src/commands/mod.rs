pub mod case_cmd;
pub mod config_cmd;
pub mod prompt_cmd;
