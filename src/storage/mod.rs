pub mod users_file;
