pub mod fancy_enum;
