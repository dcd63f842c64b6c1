mod calculation;
mod operation;
