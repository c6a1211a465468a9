use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create revendedores table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Revendedores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Revendedores::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Revendedores::NomeCompleto).text().not_null())
                    .col(ColumnDef::new(Revendedores::EmpresaLoja).text())
                    .col(ColumnDef::new(Revendedores::Cnpj).text())
                    .col(ColumnDef::new(Revendedores::CidadeEstado).text().not_null())
                    .col(
                        ColumnDef::new(Revendedores::TelefoneWhatsapp)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Revendedores::Email).text())
                    .col(ColumnDef::new(Revendedores::InstagramRedes).text())
                    .col(ColumnDef::new(Revendedores::TempoMercado).text())
                    .col(ColumnDef::new(Revendedores::EntendeProposito).text())
                    .col(ColumnDef::new(Revendedores::VendeCalcadosVestuario).text())
                    .col(ColumnDef::new(Revendedores::FormaVenda).text())
                    .col(ColumnDef::new(Revendedores::OQueChamouAtencao).text())
                    .col(ColumnDef::new(Revendedores::SeguePadroesMarca).text())
                    .col(ColumnDef::new(Revendedores::ParesPorMes).text())
                    .col(ColumnDef::new(Revendedores::ParesPorMesNum).big_integer())
                    .col(
                        ColumnDef::new(Revendedores::Status)
                            .text()
                            .default("pendente")
                            .check(Expr::cust(
                                "status IS NULL OR status IN ('pendente', 'aprovado', 'rejeitado')",
                            )),
                    )
                    .col(
                        ColumnDef::new(Revendedores::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Revendedores::UpdatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Listing and export order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_revendedores_listing_order
                ON revendedores (pares_por_mes_num DESC NULLS LAST, created_at DESC, id DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_revendedores_status
                ON revendedores (status);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_revendedores_listing_order;
                DROP INDEX IF EXISTS idx_revendedores_status;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Revendedores::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Revendedores {
    Table,
    Id,
    NomeCompleto,
    EmpresaLoja,
    Cnpj,
    CidadeEstado,
    TelefoneWhatsapp,
    Email,
    InstagramRedes,
    TempoMercado,
    EntendeProposito,
    VendeCalcadosVestuario,
    FormaVenda,
    OQueChamouAtencao,
    SeguePadroesMarca,
    ParesPorMes,
    ParesPorMesNum,
    Status,
    CreatedAt,
    UpdatedAt,
}
