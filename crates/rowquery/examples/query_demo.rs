use rowquery::logging::LogConfig;
use rowquery::{LoaderConfig, Table};

const FRUIT: &str = "\
id,fruit,quantity,year
111,apple,5,2020
222,banana,8,2021
4bc,cherry,77,2022
333,kiwi,10,2019
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Debug level shows every query being read and run
    let _guard = LogConfig::debug().init()?;

    println!("=== rowquery Query Demo ===\n");

    let table = Table::parse_str(FRUIT, LoaderConfig::default())?;
    for (column, kind) in table.schema().iter() {
        println!("{:>10}: {}", column, kind);
    }

    let queries = [
        "PROJECT id, fruit FILTER quantity = \"5\"",
        "PROJECT fruit FILTER quantity = 5",
        "PROJECT id, fruit FILTER quantity = \"five\"",
        "PROJECT id, fruit FILTER quantity > 7",
        "PROJECT id, fruit, year FILTER quantity > 77",
        "PROJECT id, fruit, year FILTER quantity < 10",
        "PROJECT id, fruit, year, quantity FILTER id = \"222\"",
        "PROJECT id, fruit, year FILTER id = 4bc",
        "PROJECT id, fruit, year FILTER id > 1",
        "PROJECT id, fruit, year FILTER id < 4bc",
        "PROJECT id, fruit FILTER quantity>7",
        "PROJECT id, fruit FILTER quantity ~ 7",
        "PROJECT id, fruit",
    ];

    for text in queries {
        println!("\n------");
        println!("Query: {}", text);
        match table.query(text) {
            Ok(rows) => {
                for row in &rows {
                    println!("  {}", row);
                }
                println!("({} rows)", rows.len());
            }
            Err(e) => println!("Error: {}", e),
        }
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
