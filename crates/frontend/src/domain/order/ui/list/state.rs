use contracts::domain::order::aggregate::Order;
use contracts::domain::order::filter::OrderFilter;
use leptos::prelude::*;

/// Which row-action modal is open, always for `selected_order`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveModal {
    Summary,
    Assign,
    Delete,
}

#[derive(Clone, Debug, Default)]
pub struct OrderListState {
    pub orders: Vec<Order>,
    pub filter: OrderFilter,
    pub loading: bool,
    /// Row id whose action dropdown is open; at most one at a time.
    pub active_dropdown: Option<i64>,
    pub selected_order: Option<Order>,
    pub modal: Option<ActiveModal>,
}

impl OrderListState {
    pub fn open_modal(&mut self, order: Order, modal: ActiveModal) {
        self.selected_order = Some(order);
        self.modal = Some(modal);
        self.active_dropdown = None;
    }

    pub fn close_modal(&mut self) {
        self.selected_order = None;
        self.modal = None;
    }
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}
