mod proptests;
mod utils;
