mod discount;
mod dish;
mod order;
