use crate::core::store::Store;
use crate::domain::location::Location;
use crate::domain::model::{to_fixed_2, Record};

const RULE: &str = "--------------------------------------------------------";

/// Inventory table, sorted by name.
pub fn inventory(store: &Store) -> String {
    let mut out = String::new();
    out.push_str("\nBoat Inventory:\n");
    out.push_str(RULE);
    out.push('\n');
    for record in store.sorted_view() {
        out.push_str(&inventory_row(record));
        out.push('\n');
    }
    out.push_str(RULE);
    out.push_str("\n\n");
    out
}

pub fn inventory_row(record: &Record) -> String {
    let feet = record.length.round_dp(0).to_string();
    let detail = match &record.location {
        Location::Slip { number } | Location::Storage { number } => format!("# {}", number),
        Location::Land { bay } => format!("   {}", bay),
        Location::Trailer { tag } => tag.to_string(),
    };
    format!(
        "{:<20} {:>4}' {:<8} {}   Owes ${}",
        record.name,
        feet,
        record.location.kind().keyword(),
        detail,
        to_fixed_2(record.amount_owed)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::DEFAULT_CAPACITY;

    #[test]
    fn test_rows_per_location() {
        let (store, _) = Store::load(
            DEFAULT_CAPACITY,
            [
                "Anna,25,slip,12,500.00",
                "Beth,30,land,B,250",
                "Cara,18,trailor,TX42,0",
                "Dora,22,storage,7,1.5",
            ],
        );
        let rows: Vec<String> = store.sorted_view().into_iter().map(inventory_row).collect();
        assert_eq!(rows[0], "Anna                   25' slip     # 12   Owes $500.00");
        assert_eq!(rows[1], "Beth                   30' land        B   Owes $250.00");
        assert_eq!(rows[2], "Cara                   18' trailor  TX42   Owes $0.00");
        assert_eq!(rows[3], "Dora                   22' storage  # 7   Owes $1.50");
    }

    #[test]
    fn test_inventory_is_sorted() {
        let (store, _) = Store::load(DEFAULT_CAPACITY, ["zeta,10,slip,1,0", "Alpha,10,slip,2,0"]);
        let table = inventory(&store);
        let alpha = table.find("Alpha").unwrap();
        let zeta = table.find("zeta").unwrap();
        assert!(alpha < zeta);
        assert!(table.starts_with("\nBoat Inventory:\n"));
        assert!(table.ends_with("\n\n"));
    }
}
