use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::database::models::{Cat, CatChanges, Feeding, NewCat, NewFeeding, NewToy, NewUser, Toy, User};
use crate::database::store::{Store, StoreError};

/// In-process store with the same relational rules as the Postgres schema:
/// unique usernames, feedings and toy links removed with their cat, and
/// dangling references rejected.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    cats: BTreeMap<i64, Cat>,
    toys: BTreeMap<i64, Toy>,
    feedings: BTreeMap<i64, Feeding>,
    cat_toys: BTreeSet<(i64, i64)>,
    next_id: Sequences,
}

#[derive(Default)]
struct Sequences {
    user: i64,
    cat: i64,
    toy: i64,
    feeding: i64,
}

fn next(seq: &mut i64) -> i64 {
    *seq += 1;
    *seq
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.inner.write().await;
        if tables.users.values().any(|u| u.username == user.username) {
            return Err(StoreError::Conflict(format!("username '{}' already exists", user.username)));
        }
        let id = next(&mut tables.next_id.user);
        let created = User {
            id,
            username: user.username,
            password_hash: user.password_hash,
            date_joined: Utc::now(),
        };
        tables.users.insert(id, created.clone());
        Ok(created)
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let tables = self.inner.read().await;
        Ok(tables.users.values().find(|u| u.username == username).cloned())
    }

    async fn list_cats_for_owner(&self, owner_id: i64) -> Result<Vec<Cat>, StoreError> {
        let tables = self.inner.read().await;
        Ok(tables.cats.values().filter(|c| c.user_id == owner_id).cloned().collect())
    }

    async fn find_cat(&self, id: i64) -> Result<Option<Cat>, StoreError> {
        Ok(self.inner.read().await.cats.get(&id).cloned())
    }

    async fn find_cat_owned(&self, id: i64, owner_id: i64) -> Result<Option<Cat>, StoreError> {
        let tables = self.inner.read().await;
        Ok(tables.cats.get(&id).filter(|c| c.user_id == owner_id).cloned())
    }

    async fn create_cat(&self, owner_id: i64, cat: NewCat) -> Result<Cat, StoreError> {
        let mut tables = self.inner.write().await;
        if !tables.users.contains_key(&owner_id) {
            return Err(StoreError::NotFound(format!("user {owner_id}")));
        }
        let id = next(&mut tables.next_id.cat);
        let created = Cat {
            id,
            name: cat.name,
            breed: cat.breed,
            description: cat.description,
            age: cat.age,
            user_id: owner_id,
        };
        tables.cats.insert(id, created.clone());
        Ok(created)
    }

    async fn update_cat(&self, id: i64, changes: CatChanges) -> Result<Option<Cat>, StoreError> {
        let mut tables = self.inner.write().await;
        Ok(tables.cats.get_mut(&id).map(|cat| {
            cat.apply(changes);
            cat.clone()
        }))
    }

    async fn delete_cat(&self, id: i64) -> Result<bool, StoreError> {
        let mut tables = self.inner.write().await;
        if tables.cats.remove(&id).is_none() {
            return Ok(false);
        }
        tables.feedings.retain(|_, f| f.cat_id != id);
        tables.cat_toys.retain(|&(cat_id, _)| cat_id != id);
        Ok(true)
    }

    async fn list_feedings(&self, cat_id: i64) -> Result<Vec<Feeding>, StoreError> {
        let tables = self.inner.read().await;
        let mut feedings: Vec<Feeding> = tables
            .feedings
            .values()
            .filter(|f| f.cat_id == cat_id)
            .cloned()
            .collect();
        feedings.sort_by(Feeding::display_order);
        Ok(feedings)
    }

    async fn add_feeding(&self, cat_id: i64, feeding: NewFeeding) -> Result<Feeding, StoreError> {
        let mut tables = self.inner.write().await;
        if !tables.cats.contains_key(&cat_id) {
            return Err(StoreError::NotFound(format!("cat {cat_id}")));
        }
        let id = next(&mut tables.next_id.feeding);
        let created = Feeding {
            id,
            date: feeding.date,
            meal: feeding.meal,
            cat_id,
        };
        tables.feedings.insert(id, created.clone());
        Ok(created)
    }

    async fn list_toys(&self) -> Result<Vec<Toy>, StoreError> {
        Ok(self.inner.read().await.toys.values().cloned().collect())
    }

    async fn find_toy(&self, id: i64) -> Result<Option<Toy>, StoreError> {
        Ok(self.inner.read().await.toys.get(&id).cloned())
    }

    async fn create_toy(&self, toy: NewToy) -> Result<Toy, StoreError> {
        let mut tables = self.inner.write().await;
        let id = next(&mut tables.next_id.toy);
        let created = Toy {
            id,
            name: toy.name,
            color: toy.color,
        };
        tables.toys.insert(id, created.clone());
        Ok(created)
    }

    async fn update_toy(&self, id: i64, toy: NewToy) -> Result<Option<Toy>, StoreError> {
        let mut tables = self.inner.write().await;
        Ok(tables.toys.get_mut(&id).map(|existing| {
            existing.name = toy.name;
            existing.color = toy.color;
            existing.clone()
        }))
    }

    async fn delete_toy(&self, id: i64) -> Result<bool, StoreError> {
        let mut tables = self.inner.write().await;
        if tables.toys.remove(&id).is_none() {
            return Ok(false);
        }
        tables.cat_toys.retain(|&(_, toy_id)| toy_id != id);
        Ok(true)
    }

    async fn list_cat_toys(&self, cat_id: i64) -> Result<Vec<Toy>, StoreError> {
        let tables = self.inner.read().await;
        Ok(tables
            .cat_toys
            .iter()
            .filter(|&&(c, _)| c == cat_id)
            .filter_map(|(_, toy_id)| tables.toys.get(toy_id).cloned())
            .collect())
    }

    async fn associate_toy(&self, cat_id: i64, toy_id: i64) -> Result<(), StoreError> {
        let mut tables = self.inner.write().await;
        if !tables.cats.contains_key(&cat_id) {
            return Err(StoreError::NotFound(format!("cat {cat_id}")));
        }
        if !tables.toys.contains_key(&toy_id) {
            return Err(StoreError::NotFound(format!("toy {toy_id}")));
        }
        tables.cat_toys.insert((cat_id, toy_id));
        Ok(())
    }

    async fn dissociate_toy(&self, cat_id: i64, toy_id: i64) -> Result<(), StoreError> {
        self.inner.write().await.cat_toys.remove(&(cat_id, toy_id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::Meal;
    use chrono::NaiveDate;

    async fn store_with_user(username: &str) -> (MemoryStore, User) {
        let store = MemoryStore::new();
        let user = store
            .create_user(NewUser {
                username: username.to_string(),
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap();
        (store, user)
    }

    fn whiskers() -> NewCat {
        NewCat {
            name: "Whiskers".to_string(),
            breed: "Tabby".to_string(),
            description: "Sleeps in the sink".to_string(),
            age: 2,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn usernames_are_unique() {
        let (store, _) = store_with_user("alice").await;
        let err = store
            .create_user(NewUser {
                username: "alice".to_string(),
                password_hash: "other".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn owner_filter_hides_other_users_cats() {
        let (store, alice) = store_with_user("alice").await;
        let bob = store
            .create_user(NewUser {
                username: "bob".to_string(),
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap();
        let cat = store.create_cat(alice.id, whiskers()).await.unwrap();

        assert_eq!(store.list_cats_for_owner(alice.id).await.unwrap(), vec![cat.clone()]);
        assert!(store.list_cats_for_owner(bob.id).await.unwrap().is_empty());
        assert!(store.find_cat_owned(cat.id, bob.id).await.unwrap().is_none());
        assert_eq!(store.find_cat(cat.id).await.unwrap(), Some(cat));
    }

    #[tokio::test]
    async fn update_keeps_name() {
        let (store, alice) = store_with_user("alice").await;
        let cat = store.create_cat(alice.id, whiskers()).await.unwrap();
        let updated = store
            .update_cat(
                cat.id,
                CatChanges {
                    breed: "Siamese".to_string(),
                    description: "Now with opinions".to_string(),
                    age: 3,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Whiskers");
        assert_eq!(updated.breed, "Siamese");
        assert_eq!(updated.age, 3);
    }

    #[tokio::test]
    async fn delete_cascades_feedings_and_toy_links() {
        let (store, alice) = store_with_user("alice").await;
        let cat = store.create_cat(alice.id, whiskers()).await.unwrap();
        let toy = store
            .create_toy(NewToy {
                name: "Mouse".to_string(),
                color: "Grey".to_string(),
            })
            .await
            .unwrap();
        store.associate_toy(cat.id, toy.id).await.unwrap();
        for day in ["2024-01-01", "2024-01-02", "2024-01-03"] {
            store
                .add_feeding(cat.id, NewFeeding { date: date(day), meal: Meal::Lunch })
                .await
                .unwrap();
        }
        assert_eq!(store.list_feedings(cat.id).await.unwrap().len(), 3);

        assert!(store.delete_cat(cat.id).await.unwrap());
        assert!(store.list_feedings(cat.id).await.unwrap().is_empty());
        assert!(store.list_cat_toys(cat.id).await.unwrap().is_empty());
        assert!(store.inner.read().await.feedings.is_empty());
        // the toy itself survives
        assert_eq!(store.find_toy(toy.id).await.unwrap(), Some(toy));
        assert!(!store.delete_cat(cat.id).await.unwrap());
    }

    #[tokio::test]
    async fn feedings_list_newest_first() {
        let (store, alice) = store_with_user("alice").await;
        let cat = store.create_cat(alice.id, whiskers()).await.unwrap();
        store
            .add_feeding(cat.id, NewFeeding { date: date("2023-12-25"), meal: Meal::Dinner })
            .await
            .unwrap();
        store
            .add_feeding(cat.id, NewFeeding { date: date("2024-01-01"), meal: Meal::Breakfast })
            .await
            .unwrap();

        let dates: Vec<NaiveDate> = store
            .list_feedings(cat.id)
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.date)
            .collect();
        assert_eq!(dates, vec![date("2024-01-01"), date("2023-12-25")]);
    }

    #[tokio::test]
    async fn toy_links_are_idempotent_and_checked() {
        let (store, alice) = store_with_user("alice").await;
        let cat = store.create_cat(alice.id, whiskers()).await.unwrap();
        let toy = store
            .create_toy(NewToy {
                name: "Feather".to_string(),
                color: "Red".to_string(),
            })
            .await
            .unwrap();

        store.associate_toy(cat.id, toy.id).await.unwrap();
        store.associate_toy(cat.id, toy.id).await.unwrap();
        assert_eq!(store.list_cat_toys(cat.id).await.unwrap(), vec![toy.clone()]);

        let err = store.associate_toy(cat.id, 999).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));

        store.dissociate_toy(cat.id, toy.id).await.unwrap();
        assert!(store.list_cat_toys(cat.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn toy_update_and_delete() {
        let store = MemoryStore::new();
        let toy = store
            .create_toy(NewToy {
                name: "Ball".to_string(),
                color: "Blue".to_string(),
            })
            .await
            .unwrap();
        let renamed = store
            .update_toy(
                toy.id,
                NewToy {
                    name: "Bell ball".to_string(),
                    color: "Gold".to_string(),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(renamed.name, "Bell ball");
        assert!(store.delete_toy(toy.id).await.unwrap());
        assert!(store.find_toy(toy.id).await.unwrap().is_none());
        assert!(store.update_toy(toy.id, NewToy { name: "x".into(), color: "y".into() }).await.unwrap().is_none());
    }
}
