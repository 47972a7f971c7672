mod repository;
mod service;

pub use self::repository::{
    CartCommandRepositoryTrait, CartQueryRepositoryTrait, DynCartCommandRepository,
    DynCartQueryRepository,
};
pub use self::service::{
    CartCommandServiceTrait, CartQueryServiceTrait, DynCartCommandService, DynCartQueryService,
};
