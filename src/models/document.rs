//! The persisted document and the in-memory operations handlers run
//! between a store `load` and `save`.

use serde::{Deserialize, Serialize};

use super::employee::{Employee, EmployeeChanges};
use super::shop::{Shop, ShopChanges};

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Document {
    #[serde(default)]
    pub shops: Vec<Shop>,
    #[serde(default)]
    pub employees: Vec<Employee>,
}

impl Document {
    /// All shops, or those whose name or category contains `q` ignoring case.
    /// An empty `q` does not filter.
    pub fn search_shops(&self, q: Option<&str>) -> Vec<Shop> {
        match q.filter(|q| !q.is_empty()) {
            Some(q) => {
                let needle = q.to_lowercase();
                self.shops.iter().filter(|s| s.matches(&needle)).cloned().collect()
            }
            None => self.shops.clone(),
        }
    }

    pub fn shop(&self, id: &str) -> Option<&Shop> {
        self.shops.iter().find(|s| s.id == id)
    }

    pub fn update_shop(&mut self, id: &str, changes: ShopChanges) -> Option<&Shop> {
        let shop = self.shops.iter_mut().find(|s| s.id == id)?;
        shop.apply(changes);
        Some(shop)
    }

    /// Removes the shop and every employee assigned to it. Returns how many
    /// records of each kind went away.
    pub fn remove_shop(&mut self, id: &str) -> (usize, usize) {
        let shops_before = self.shops.len();
        self.shops.retain(|s| s.id != id);
        let employees_before = self.employees.len();
        self.employees.retain(|e| !e.works_at(id));
        (shops_before - self.shops.len(), employees_before - self.employees.len())
    }

    pub fn employees_of(&self, shop_id: &str) -> Vec<Employee> {
        self.employees.iter().filter(|e| e.works_at(shop_id)).cloned().collect()
    }

    pub fn list_employees(&self, shop_id: Option<&str>) -> Vec<Employee> {
        match shop_id.filter(|s| !s.is_empty()) {
            Some(shop_id) => self.employees_of(shop_id),
            None => self.employees.clone(),
        }
    }

    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn update_employee(&mut self, id: &str, changes: EmployeeChanges) -> Option<&Employee> {
        let employee = self.employees.iter_mut().find(|e| e.id == id)?;
        employee.apply(changes);
        Some(employee)
    }

    pub fn remove_employee(&mut self, id: &str) -> bool {
        let before = self.employees.len();
        self.employees.retain(|e| e.id != id);
        before != self.employees.len()
    }
}
