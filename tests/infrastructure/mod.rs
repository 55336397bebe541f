mod csv_table_loader_test;
mod question_sanitizer_test;
