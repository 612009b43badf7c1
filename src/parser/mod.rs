pub mod token_path;
