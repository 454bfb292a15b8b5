pub mod add_expense_form;
pub mod expense_list;
