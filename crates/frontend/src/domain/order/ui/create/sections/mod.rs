pub mod client_information;
pub mod customer_selection;
pub mod instructions;
pub mod measurements;
pub mod order_items;
pub mod timeline;
