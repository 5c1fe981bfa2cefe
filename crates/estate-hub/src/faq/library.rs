use super::domain::{FaqCategory, FaqEntry};

/// Built-in knowledge base served when no JSON export is configured.
pub(crate) fn standard_categories() -> Vec<FaqCategory> {
    vec![
        category(
            "account",
            "Account & Login",
            vec![
                entry(
                    "login-issues",
                    "Login Issues",
                    "If you cannot sign in, confirm the registered mobile number, request a fresh OTP, and clear the browser cache. Accounts lock for 30 minutes after five failed attempts.",
                ),
                entry(
                    "password-reset",
                    "Resetting Your Password",
                    "Choose 'Forgot password' on the login screen. A reset link valid for 24 hours is sent to your registered email address.",
                ),
                entry(
                    "profile-verification",
                    "Verifying Your Profile",
                    "Upload a government ID and a selfie from the profile page. Verified profiles get a badge and higher visibility in search.",
                ),
            ],
        ),
        category(
            "buying",
            "Buying a Property",
            vec![
                buyer_entry(
                    "home-loans",
                    "Home Loan Assistance",
                    "Our partner banks offer pre-approved home loans. Share your income documents and we will compare interest rates across lenders for you.",
                ),
                buyer_entry(
                    "site-visits",
                    "Scheduling Site Visits",
                    "Pick a slot on the property page. The owner or agent confirms within 12 hours, and you can reschedule from your dashboard.",
                ),
                entry(
                    "token-amount",
                    "Paying a Token Amount",
                    "Token payments are held in escrow until the sale agreement is signed. Always pay through the platform to stay protected.",
                ),
            ],
        ),
        category(
            "selling",
            "Selling Your Property",
            vec![
                seller_entry(
                    "listing-property",
                    "Listing Your Property",
                    "Add photos, the asking price, and ownership documents. Listings go live after a quick review by our verification team.",
                ),
                seller_entry(
                    "seller-dashboard",
                    "Seller Dashboard Access",
                    "Seller tools unlock after your first listing. Login with the same account, then open the dashboard to track enquiries and login history for co-owners.",
                ),
                seller_entry(
                    "pricing-guidance",
                    "Pricing Guidance",
                    "We suggest a price band using recent registrations in your locality. You can edit the asking price at any time.",
                ),
            ],
        ),
        category(
            "payments",
            "Payments & Subscriptions",
            vec![
                entry(
                    "refunds",
                    "Refund Timelines",
                    "Refunds for cancelled plans are processed to the original payment method within 7 working days.",
                ),
                entry(
                    "premium-plans",
                    "Premium Plans",
                    "Premium plans add featured placement, relationship manager support, and unlimited contact unlocks.",
                ),
            ],
        ),
        category(
            "services",
            "Home Services",
            vec![
                entry(
                    "booking-providers",
                    "Booking a Service Provider",
                    "Browse lawyers, painters, movers, and more from the services directory. Booking confirms once the provider accepts your request.",
                ),
                entry(
                    "provider-verification",
                    "How Providers Are Verified",
                    "Providers submit trade licenses and identity proof. Verified providers display a badge next to their rating.",
                ),
            ],
        ),
        category(
            "partners",
            "Partner Program",
            vec![
                entry(
                    "submitting-leads",
                    "Submitting Leads",
                    "Partners submit buyer or seller leads from the partner portal. Each lead is tracked from first contact to closing.",
                ),
                entry(
                    "commission-payouts",
                    "Commission Payouts",
                    "Commission is released within 15 days of a closed deal, once the registration documents are verified.",
                ),
            ],
        ),
    ]
}

fn category(id: &str, title: &str, subcategories: Vec<FaqEntry>) -> FaqCategory {
    FaqCategory {
        id: id.to_string(),
        title: title.to_string(),
        subcategories,
    }
}

fn entry(id: &str, title: &str, resolution: &str) -> FaqEntry {
    FaqEntry {
        id: id.to_string(),
        title: title.to_string(),
        resolution: resolution.to_string(),
        buyer_specific: false,
        seller_specific: false,
    }
}

fn buyer_entry(id: &str, title: &str, resolution: &str) -> FaqEntry {
    FaqEntry {
        buyer_specific: true,
        ..entry(id, title, resolution)
    }
}

fn seller_entry(id: &str, title: &str, resolution: &str) -> FaqEntry {
    FaqEntry {
        seller_specific: true,
        ..entry(id, title, resolution)
    }
}
