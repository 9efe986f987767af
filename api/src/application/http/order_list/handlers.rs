pub mod get_order_list;
