mod compound;
mod constituents;
mod formula_node;
