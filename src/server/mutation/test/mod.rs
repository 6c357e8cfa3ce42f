use crate::server::{
    error::AppError,
    model::context::MutationContext,
    mutation::{cascade, Patch, ResourceKind, UnitOfWork},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
