pub mod new_item;
