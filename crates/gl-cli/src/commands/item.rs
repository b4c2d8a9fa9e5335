use clap::Subcommand;
use comfy_table::{ContentArrangement, Table};
use gl_core::{Character, Command, Item, ItemId, ItemType};

use super::Session;

#[derive(Subcommand)]
pub enum ItemAction {
    /// Add an item to the inventory
    Add {
        /// Item name
        name: String,

        /// weapon, armor, utility or consumable
        #[arg(short = 't', long = "type", default_value = "utility")]
        item_type: String,

        /// Damage expression, e.g. "1d8+2"
        #[arg(long)]
        damage: Option<String>,

        /// Armor Class bonus while equipped
        #[arg(long)]
        defense: Option<i64>,

        /// Free-form description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Weight
        #[arg(long)]
        weight: Option<f64>,
    },

    /// Equip or unequip an item
    Equip {
        /// Item name
        name: String,
    },

    /// Remove an item from the inventory
    Remove {
        /// Item name
        name: String,
    },
}

pub fn run(session: Session, action: ItemAction) -> Result<(), String> {
    match action {
        ItemAction::Add {
            name,
            item_type,
            damage,
            defense,
            description,
            weight,
        } => {
            let item_type = ItemType::parse(&item_type)
                .ok_or_else(|| format!("unknown item type: '{item_type}'"))?;
            let mut item = Item::new(name.trim(), item_type);
            item.damage = damage;
            item.defense = defense;
            item.description = description;
            item.weight = weight;
            let done = format!("Added {} ({})", item.name, item.item_type);
            session.commit(Command::AddItem(item), &done)
        }
        ItemAction::Equip { name } => {
            let id = resolve(&session, &name)?;
            let equipping = session
                .active()
                .item(id)
                .is_some_and(|i| !i.is_equipped);
            let done = if equipping {
                format!("Equipped {name}")
            } else {
                format!("Unequipped {name}")
            };
            session.commit(Command::ToggleEquip { item: id }, &done)
        }
        ItemAction::Remove { name } => {
            let id = resolve(&session, &name)?;
            let done = format!("Removed {name}");
            session.commit(Command::RemoveItem { item: id }, &done)
        }
    }
}

fn resolve(session: &Session, name: &str) -> Result<ItemId, String> {
    session
        .active()
        .item_by_name(name)
        .map(|i| i.id)
        .ok_or_else(|| format!("item not found: \"{name}\""))
}

/// The inventory as a table.
pub fn inventory_table(c: &Character) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Item", "Type", "Damage", "Defense", "Equipped"]);
    for item in &c.items {
        table.add_row(vec![
            item.name.clone(),
            item.item_type.to_string(),
            item.damage.clone().unwrap_or_default(),
            item.defense.map(|d| format!("{d:+}")).unwrap_or_default(),
            if item.is_equipped { "yes" } else { "" }.to_string(),
        ]);
    }
    table
}
