pub mod talker_store;
