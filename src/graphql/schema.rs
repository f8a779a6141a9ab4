use async_graphql::{EmptySubscription, Schema};

use crate::graphql::{MutationRoot, QueryRoot};

pub type CampaignSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn create_schema() -> CampaignSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription).finish()
}
