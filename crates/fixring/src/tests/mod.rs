
mod manual;
