use crate::application::ports::util::IdGenerator;
use uuid::Uuid;

#[derive(Default, Clone)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
