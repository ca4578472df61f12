use crate::models::{
    AnalogTable, DeviceListTable, DeviceLogCurrentTable, Table, UserDetailsTable,
    UserDeviceListTable,
};

/// Orders table definitions so that every table is created after the tables
/// it references, and dropped before them.
pub struct SchemaManager {
    tables: Vec<Box<dyn Table + Send + Sync>>,
}

impl SchemaManager {
    pub fn new(mut tables: Vec<Box<dyn Table + Send + Sync>>) -> Self {
        Self::sort_tables(&mut tables);
        Self { tables }
    }

    fn sort_tables(tables: &mut Vec<Box<dyn Table + Send + Sync>>) {
        let mut to_sort = std::mem::take(tables);
        let mut deps_list: Vec<_> = to_sort.iter().map(|t| t.dependencies()).collect();
        let mut sorted: Vec<Box<dyn Table + Send + Sync>> = Vec::with_capacity(to_sort.len());

        while !to_sort.is_empty() {
            let mut independent_indices: Vec<usize> = deps_list
                .iter()
                .enumerate()
                .filter(|(_, deps)| deps.is_empty())
                .map(|(i, _)| i)
                .collect();

            assert!(
                !independent_indices.is_empty(),
                "Circular dependency detected or unresolved dependencies exist."
            );

            // swap_remove from the back keeps the remaining indices valid
            independent_indices.sort_unstable();
            let mut batch = Vec::with_capacity(independent_indices.len());
            for &index in independent_indices.iter().rev() {
                batch.push(to_sort.swap_remove(index));
                let _ = deps_list.swap_remove(index);
            }
            batch.sort_by_key(|table| table.name());
            sorted.extend(batch);

            for deps in deps_list.iter_mut() {
                deps.retain(|dep_name| {
                    !sorted.iter().any(|resolved| resolved.name() == *dep_name)
                });
            }
        }

        *tables = sorted;
    }

    pub fn create_schema(&self) -> Vec<String> {
        self.tables.iter().map(|table| table.create()).collect()
    }

    pub fn dispose_schema(&self) -> Vec<String> {
        self.tables.iter().rev().map(|table| table.dispose()).collect()
    }
}

impl Default for SchemaManager {
    fn default() -> Self {
        SchemaManager::new(vec![
            Box::new(UserDetailsTable),
            Box::new(DeviceListTable),
            Box::new(DeviceLogCurrentTable),
            Box::new(AnalogTable),
            // Reference
            Box::new(UserDeviceListTable),
        ])
    }
}
