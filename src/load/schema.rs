/// DDL for the destination table. The recreate is destructive and
/// unconditional: every run drops and rebuilds the table. There is no
/// migration path.
pub fn drop_table(table: &str) -> String {
    format!("DROP TABLE IF EXISTS {}", table)
}

pub fn create_table(table: &str) -> String {
    format!(
        "CREATE TABLE {} (\n\
         \x20   id INT AUTO_INCREMENT PRIMARY KEY,\n\
         \x20   full_name VARCHAR(255),\n\
         \x20   phone VARCHAR(50),\n\
         \x20   country VARCHAR(100),\n\
         \x20   region VARCHAR(100),\n\
         \x20   email VARCHAR(255),\n\
         \x20   age INT,\n\
         \x20   errors TEXT\n\
         )",
        table
    )
}
