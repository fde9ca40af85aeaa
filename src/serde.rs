pub mod password_hash_string;
