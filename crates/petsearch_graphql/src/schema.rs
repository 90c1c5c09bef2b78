//! Pet type, query root and schema construction.

use crate::error::service_error;
use crate::SharedPetService;
use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema, ID};
use log::error;
use petsearch_core::{Pet, PetServiceError};

pub type PetSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Builds the executable schema with `service` as resolver context.
pub fn build_schema(service: SharedPetService) -> PetSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(service)
        .finish()
}

/// Renders the schema definition language for the query surface.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .finish()
        .sdl()
}

/// GraphQL view of one [`Pet`].
pub struct PetObject(Pet);

impl From<Pet> for PetObject {
    fn from(value: Pet) -> Self {
        Self(value)
    }
}

#[Object(name = "Pet")]
impl PetObject {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    // Stored records without a name fail here, which nulls that list entry.
    async fn name(&self) -> async_graphql::Result<&str> {
        self.0.validate()?;
        Ok(self.0.name.as_str())
    }

    async fn breed(&self) -> Option<&str> {
        self.0.breed.as_deref()
    }

    async fn age(&self) -> Option<u32> {
        self.0.age
    }

    async fn health_status(&self) -> Option<&str> {
        self.0.health_status.as_deref()
    }

    async fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    async fn location(&self) -> Option<&str> {
        self.0.location.as_deref()
    }

    async fn images(&self) -> Option<Vec<Option<String>>> {
        Some(self.0.images.iter().cloned().map(Some).collect())
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn get_pets_by_breed(
        &self,
        ctx: &Context<'_>,
        breed: String,
    ) -> async_graphql::Result<Option<Vec<Option<PetObject>>>> {
        let service = ctx.data::<SharedPetService>()?.clone();
        let pets = run_lookup(move || service.get_pets_by_breed(Some(breed.as_str()))).await?;
        Ok(Some(into_list(pets)))
    }

    async fn get_pets_by_location(
        &self,
        ctx: &Context<'_>,
        location: String,
    ) -> async_graphql::Result<Option<Vec<Option<PetObject>>>> {
        let service = ctx.data::<SharedPetService>()?.clone();
        let pets =
            run_lookup(move || service.get_pets_by_location(Some(location.as_str()))).await?;
        Ok(Some(into_list(pets)))
    }
}

// Store queries block, so they run on tokio's blocking pool.
async fn run_lookup<F>(lookup: F) -> async_graphql::Result<Vec<Pet>>
where
    F: FnOnce() -> Result<Vec<Pet>, PetServiceError> + Send + 'static,
{
    match tokio::task::spawn_blocking(lookup).await {
        Ok(result) => result.map_err(service_error),
        Err(err) => {
            error!(
                "event=pet_query module=graphql status=error error_code=lookup_task_failed error={err}"
            );
            Err(async_graphql::Error::new(err.to_string()))
        }
    }
}

fn into_list(pets: Vec<Pet>) -> Vec<Option<PetObject>> {
    pets.into_iter().map(|pet| Some(PetObject::from(pet))).collect()
}
