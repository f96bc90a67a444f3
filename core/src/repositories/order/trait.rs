//! Order repository trait.

use crate::domain::entities::order::{Order, OrderChanges};
use crate::repositories::crud::CrudRepository;

/// Persistence for orders
///
/// Orders carry no unique keys besides their id, so the CRUD capability set
/// is the whole contract. `find_all` returns orders by `date` descending.
pub trait OrderRepository: CrudRepository<Entity = Order, Changes = OrderChanges> {}
