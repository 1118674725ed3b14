//! The static catalog of Vaultix tools, in listing order.

use super::operation::{BodyShape, OpMethod, Operation, Param, QueryDefault};

const PAYMENT_METHODS: &[&str] = &["pix", "credit_card", "boleto"];

const LIMIT: Param = Param::number("limit", "Maximum results (1-100)");

const fn id(description: &'static str) -> Param {
    Param::string("id", description).required()
}

/// All operations exposed as tools.
pub static CATALOG: &[Operation] = &[
    // Charges
    Operation {
        name: "vaultix_create_charge",
        description: "Create a new payment charge (PIX, Credit Card, or Boleto). Amount is in cents (e.g., 5000 = R$ 50,00)",
        method: OpMethod::Post,
        path: "/charges",
        params: &[
            Param::number("amount", "Amount in cents (minimum 100 = R$ 1,00)").required(),
            Param::string("payment_method", "Payment method").one_of(PAYMENT_METHODS).required(),
            Param::string("customer_name", "Customer name").required(),
            Param::string("customer_email", "Customer email").required(),
            Param::string("customer_document", "Customer CPF/CNPJ"),
            Param::string("description", "Charge description"),
        ],
        query: &[],
        query_defaults: &[],
        body: BodyShape::Charge,
    },
    Operation {
        name: "vaultix_get_charge",
        description: "Retrieve a charge by ID",
        method: OpMethod::Get,
        path: "/charges/{id}",
        params: &[id("Charge ID (ch_...)")],
        query: &[],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    Operation {
        name: "vaultix_list_charges",
        description: "List all charges with optional filters",
        method: OpMethod::Get,
        path: "/charges",
        params: &[
            LIMIT,
            Param::string("status", "Filter by status")
                .one_of(&["pending", "paid", "failed", "canceled", "refunded"]),
            Param::string("payment_method", "Filter by payment method").one_of(PAYMENT_METHODS),
        ],
        query: &["limit", "status", "payment_method"],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    Operation {
        name: "vaultix_cancel_charge",
        description: "Cancel a pending or authorized charge",
        method: OpMethod::Post,
        path: "/charges/{id}/cancel",
        params: &[id("Charge ID to cancel")],
        query: &[],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    // Customers
    Operation {
        name: "vaultix_create_customer",
        description: "Create a new customer",
        method: OpMethod::Post,
        path: "/customers",
        params: &[
            Param::string("name", "Customer name").required(),
            Param::string("email", "Customer email"),
            Param::string("document", "CPF/CNPJ"),
            Param::string("phone", "Phone number"),
        ],
        query: &[],
        query_defaults: &[],
        body: BodyShape::Pick(&["name", "email", "document", "phone"]),
    },
    Operation {
        name: "vaultix_get_customer",
        description: "Retrieve a customer by ID",
        method: OpMethod::Get,
        path: "/customers/{id}",
        params: &[id("Customer ID (cus_...)")],
        query: &[],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    Operation {
        name: "vaultix_list_customers",
        description: "List all customers",
        method: OpMethod::Get,
        path: "/customers",
        params: &[LIMIT, Param::string("email", "Filter by email")],
        query: &["limit", "email"],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    Operation {
        name: "vaultix_update_customer",
        description: "Update a customer",
        method: OpMethod::Put,
        path: "/customers/{id}",
        params: &[
            id("Customer ID"),
            Param::string("name", "New name"),
            Param::string("email", "New email"),
            Param::string("phone", "New phone"),
        ],
        query: &[],
        query_defaults: &[],
        body: BodyShape::WithoutId,
    },
    Operation {
        name: "vaultix_delete_customer",
        description: "Delete a customer",
        method: OpMethod::Delete,
        path: "/customers/{id}",
        params: &[id("Customer ID to delete")],
        query: &[],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    // Refunds
    Operation {
        name: "vaultix_create_refund",
        description: "Create a refund for a paid charge. Amount in cents for partial refund.",
        method: OpMethod::Post,
        path: "/refunds",
        params: &[
            Param::string("charge", "Charge ID to refund").required(),
            Param::number("amount", "Amount in cents (optional, for partial refund)"),
            Param::string("reason", "Reason for refund"),
        ],
        query: &[],
        query_defaults: &[],
        body: BodyShape::Pick(&["charge", "amount", "reason"]),
    },
    Operation {
        name: "vaultix_get_refund",
        description: "Retrieve a refund by ID",
        method: OpMethod::Get,
        path: "/refunds/{id}",
        params: &[id("Refund ID (re_...)")],
        query: &[],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    Operation {
        name: "vaultix_list_refunds",
        description: "List all refunds",
        method: OpMethod::Get,
        path: "/refunds",
        params: &[LIMIT, Param::string("charge", "Filter by charge ID")],
        query: &["limit", "charge"],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    // Balance
    Operation {
        name: "vaultix_get_balance",
        description: "Get current account balance (available and pending)",
        method: OpMethod::Get,
        path: "/balance",
        params: &[],
        query: &[],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    Operation {
        name: "vaultix_list_balance_transactions",
        description: "List balance transactions (statement)",
        method: OpMethod::Get,
        path: "/balance/transactions",
        params: &[
            LIMIT,
            Param::string("type", "Filter by type").one_of(&["charge", "refund"]),
        ],
        query: &["limit", "type"],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    // Products
    Operation {
        name: "vaultix_create_product",
        description: "Create a new product in the catalog. Price is in cents.",
        method: OpMethod::Post,
        path: "/products",
        params: &[
            Param::string("name", "Product name").required(),
            Param::number("price", "Price in cents").required(),
            Param::string("description", "Product description"),
            Param::number("stock_quantity", "Stock quantity"),
            Param::string("sku", "SKU code"),
        ],
        query: &[],
        query_defaults: &[],
        body: BodyShape::Pick(&["name", "price", "description", "stock_quantity", "sku"]),
    },
    Operation {
        name: "vaultix_get_product",
        description: "Retrieve a product by ID",
        method: OpMethod::Get,
        path: "/products/{id}",
        params: &[id("Product ID (prod_...)")],
        query: &[],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    Operation {
        name: "vaultix_list_products",
        description: "List all products",
        method: OpMethod::Get,
        path: "/products",
        params: &[
            LIMIT,
            Param::string("status", "Filter by status").one_of(&["active", "draft", "archived"]),
            Param::string("search", "Search by name or SKU"),
        ],
        query: &["limit", "status", "search"],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    Operation {
        name: "vaultix_update_product",
        description: "Update a product",
        method: OpMethod::Put,
        path: "/products/{id}",
        params: &[
            id("Product ID"),
            Param::string("name", "New name"),
            Param::number("price", "New price in cents"),
            Param::number("stock_quantity", "New stock quantity"),
        ],
        query: &[],
        query_defaults: &[],
        body: BodyShape::WithoutId,
    },
    Operation {
        name: "vaultix_delete_product",
        description: "Delete a product",
        method: OpMethod::Delete,
        path: "/products/{id}",
        params: &[id("Product ID to delete")],
        query: &[],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    // Orders
    Operation {
        name: "vaultix_get_order",
        description: "Retrieve an order by ID",
        method: OpMethod::Get,
        path: "/orders/{id}",
        params: &[
            id("Order ID"),
            Param::string("expand", "Expand items").one_of(&["items"]),
        ],
        query: &["expand"],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    Operation {
        name: "vaultix_list_orders",
        description: "List all orders",
        method: OpMethod::Get,
        path: "/orders",
        params: &[
            LIMIT,
            Param::string("status", "Filter by status")
                .one_of(&["pending", "processing", "completed", "canceled"]),
            Param::string("payment_status", "Filter by payment status")
                .one_of(&["pending", "paid", "failed"]),
        ],
        query: &["limit", "status", "payment_status"],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    // Transactions
    Operation {
        name: "vaultix_get_transaction",
        description: "Retrieve a transaction by ID",
        method: OpMethod::Get,
        path: "/transactions/{id}",
        params: &[id("Transaction ID")],
        query: &[],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    Operation {
        name: "vaultix_list_transactions",
        description: "List all transactions (unified view of charges, refunds, payouts)",
        method: OpMethod::Get,
        path: "/transactions",
        params: &[
            LIMIT,
            Param::string("type", "Filter by type").one_of(&["charge", "refund", "payout"]),
            Param::string("source", "Filter by source").one_of(&["charge", "refund", "payout"]),
        ],
        query: &["limit", "type", "source"],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    Operation {
        name: "vaultix_get_transactions_summary",
        description: "Get transaction summary for a period",
        method: OpMethod::Get,
        path: "/transactions/summary",
        params: &[Param::string("period", "Period for summary (default: 30d)")
            .one_of(&["24h", "7d", "30d", "90d"])],
        query: &["period"],
        query_defaults: &[QueryDefault {
            name: "period",
            value: "30d",
        }],
        body: BodyShape::Empty,
    },
    // Payment links
    Operation {
        name: "vaultix_create_payment_link",
        description: "Create a shareable payment link. Amount in cents.",
        method: OpMethod::Post,
        path: "/payment-links",
        params: &[
            Param::number("amount", "Amount in cents (minimum 100)").required(),
            Param::string("description", "Link description"),
            Param::string_array("payment_methods", "Allowed methods: pix, credit_card"),
            Param::string("success_url", "Redirect URL after payment"),
            Param::number("max_uses", "Maximum number of uses"),
        ],
        query: &[],
        query_defaults: &[],
        body: BodyShape::Pick(&[
            "amount",
            "description",
            "payment_methods",
            "success_url",
            "max_uses",
        ]),
    },
    Operation {
        name: "vaultix_get_payment_link",
        description: "Retrieve a payment link by ID",
        method: OpMethod::Get,
        path: "/payment-links/{id}",
        params: &[id("Payment Link ID (plink_...)")],
        query: &[],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    Operation {
        name: "vaultix_list_payment_links",
        description: "List all payment links",
        method: OpMethod::Get,
        path: "/payment-links",
        params: &[
            LIMIT,
            Param::string("status", "Filter by status").one_of(&["active", "inactive"]),
        ],
        query: &["limit", "status"],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    Operation {
        name: "vaultix_deactivate_payment_link",
        description: "Deactivate a payment link",
        method: OpMethod::Post,
        path: "/payment-links/{id}/deactivate",
        params: &[id("Payment Link ID to deactivate")],
        query: &[],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    // Payouts
    Operation {
        name: "vaultix_create_payout",
        description: "Create a payout (withdrawal) via PIX or bank transfer. Amount in cents.",
        method: OpMethod::Post,
        path: "/payouts",
        params: &[
            Param::number("amount", "Amount in cents (minimum 100)").required(),
            Param::string("pix_key", "PIX key (for PIX payout)"),
            Param::string("bank_code", "Bank code (for bank transfer)"),
            Param::string("branch", "Branch number"),
            Param::string("account", "Account number"),
            Param::string("account_type", "Account type").one_of(&["checking", "savings"]),
            Param::string("holder_name", "Account holder name"),
            Param::string("holder_document", "Holder CPF/CNPJ"),
            Param::string("description", "Payout description"),
        ],
        query: &[],
        query_defaults: &[],
        body: BodyShape::Payout,
    },
    Operation {
        name: "vaultix_get_payout",
        description: "Retrieve a payout by ID",
        method: OpMethod::Get,
        path: "/payouts/{id}",
        params: &[id("Payout ID (po_...)")],
        query: &[],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    Operation {
        name: "vaultix_list_payouts",
        description: "List all payouts",
        method: OpMethod::Get,
        path: "/payouts",
        params: &[
            LIMIT,
            Param::string("status", "Filter by status")
                .one_of(&["pending", "in_transit", "completed", "failed", "canceled"]),
        ],
        query: &["limit", "status"],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
    Operation {
        name: "vaultix_cancel_payout",
        description: "Cancel a pending payout",
        method: OpMethod::Post,
        path: "/payouts/{id}/cancel",
        params: &[id("Payout ID to cancel")],
        query: &[],
        query_defaults: &[],
        body: BodyShape::Empty,
    },
];
