mod hierarchy;
mod interface;
