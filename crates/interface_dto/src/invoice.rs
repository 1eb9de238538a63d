//! Invoice wire shapes
//!
//! Two outbound views of an invoice: a summary for listings and a detail
//! view carrying the full monetary breakdown. Inbound, the only invoice
//! parameters a caller supplies are the emission and due dates; everything
//! else is computed by the valuation engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_billing::{Invoice, InvoiceStatus};

use crate::contract::ContractDto;
use crate::wire_amount;

/// Wire status of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatusDto {
    Issued,
    Cancelled,
}

impl InvoiceStatusDto {
    pub fn from_model(status: InvoiceStatus) -> Self {
        match status {
            InvoiceStatus::Issued => InvoiceStatusDto::Issued,
            InvoiceStatus::Cancelled { .. } => InvoiceStatusDto::Cancelled,
        }
    }
}

/// Inbound parameters for issuing an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueInvoiceRequest {
    #[serde(rename = "dataEmissao")]
    pub emission_date: NaiveDate,
    #[serde(rename = "dataVencimento")]
    pub due_date: NaiveDate,
}

/// Summary view of an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSummaryDto {
    pub id: Uuid,
    #[serde(rename = "valorContrato")]
    pub contract_value: Decimal,
    #[serde(rename = "dataEmissao")]
    pub emission_date: NaiveDate,
    #[serde(rename = "dataVencimento")]
    pub due_date: NaiveDate,
    #[serde(rename = "valorTotal")]
    pub total_value: Decimal,
    #[serde(rename = "contrato")]
    pub contract: ContractDto,
}

impl InvoiceSummaryDto {
    pub fn from_model(invoice: &Invoice) -> Self {
        Self {
            id: *invoice.id().as_uuid(),
            contract_value: wire_amount(invoice.contract_value()),
            emission_date: invoice.emission_date(),
            due_date: invoice.due_date(),
            total_value: wire_amount(invoice.total_value()),
            contract: ContractDto::from_model(invoice.contract()),
        }
    }
}

/// Full monetary breakdown of an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDataDto {
    #[serde(rename = "valorContrato")]
    pub contract_value: Decimal,
    #[serde(rename = "valorAdicionalConsulta")]
    pub consultation_surcharge: Decimal,
    #[serde(rename = "valorAdicionalCirurgia")]
    pub surgery_surcharge: Decimal,
    #[serde(rename = "valorAdicionalIdade")]
    pub age_surcharge: Decimal,
    #[serde(rename = "dataEmissao")]
    pub emission_date: NaiveDate,
    #[serde(rename = "dataCancelamento")]
    pub cancellation_date: Option<NaiveDate>,
    #[serde(rename = "dataVencimento")]
    pub due_date: NaiveDate,
    #[serde(rename = "valorTotal")]
    pub total_value: Decimal,
    #[serde(rename = "contrato")]
    pub contract: ContractDto,
}

impl InvoiceDataDto {
    pub fn from_model(invoice: &Invoice) -> Self {
        Self {
            contract_value: wire_amount(invoice.contract_value()),
            consultation_surcharge: wire_amount(invoice.consultation_surcharge()),
            surgery_surcharge: wire_amount(invoice.surgery_surcharge()),
            age_surcharge: wire_amount(invoice.age_surcharge()),
            emission_date: invoice.emission_date(),
            cancellation_date: invoice.cancellation_date(),
            due_date: invoice.due_date(),
            total_value: wire_amount(invoice.total_value()),
            contract: ContractDto::from_model(invoice.contract()),
        }
    }
}

/// Detail view of an invoice: status plus the full breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDetailsDto {
    pub id: Uuid,
    pub status: InvoiceStatusDto,
    #[serde(rename = "cobrancaData")]
    pub invoice_data: InvoiceDataDto,
}

impl InvoiceDetailsDto {
    pub fn from_model(invoice: &Invoice) -> Self {
        Self {
            id: *invoice.id().as_uuid(),
            status: InvoiceStatusDto::from_model(invoice.status()),
            invoice_data: InvoiceDataDto::from_model(invoice),
        }
    }
}
