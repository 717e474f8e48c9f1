use warden_core::responses::DeleteResponse;
use warden_db::updates::building::BuildingUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BuildingCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `wdn building`.
pub async fn handle(
    action: &BuildingCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        BuildingCommands::Create { name, address } => {
            let building = ctx
                .service
                .create_building(name, address.as_deref())
                .await?;
            output(&building, flags.format)
        }
        BuildingCommands::List { limit } => {
            let limit = effective_limit(*limit, ctx.config.general.default_limit);
            let buildings = ctx.service.list_buildings(limit).await?;
            output(&buildings, flags.format)
        }
        BuildingCommands::Get { id } => {
            let building = ctx.service.get_building(*id).await?;
            output(&building, flags.format)
        }
        BuildingCommands::Update {
            id,
            name,
            address,
            clear_address,
        } => {
            let mut builder = BuildingUpdateBuilder::new();
            if let Some(name) = name.as_deref() {
                builder = builder.name(name);
            }
            if let Some(address) = address {
                builder = builder.address(Some(address.clone()));
            } else if *clear_address {
                builder = builder.address(None);
            }
            let update = builder.build();
            if update.is_empty() {
                anyhow::bail!("At least one of --name, --address, or --clear-address must be provided");
            }
            let building = ctx.service.update_building(*id, update).await?;
            output(&building, flags.format)
        }
        BuildingCommands::Delete { id } => {
            ctx.service.delete_building(*id).await?;
            output(
                &DeleteResponse {
                    entity: String::from("building"),
                    id: *id,
                    deleted: true,
                },
                flags.format,
            )
        }
    }
}
