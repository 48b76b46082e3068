mod counter_view;

pub use counter_view::CounterView;
