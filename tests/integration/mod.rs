mod cache_behavior;
mod test_utils;
mod tree_structure;
