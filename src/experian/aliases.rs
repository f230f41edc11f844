//! Candidate key names for every logical field, in priority order.
//!
//! CAIS-style `INProfileResponse` names come first, then the flat names used by simplified
//! `ExperianReport` exports.

pub const ROOT_WRAPPERS: &[&str] = &["INProfileResponse", "ExperianReport", "Report", "CreditReport"];

// Basic details containers.
pub const CURRENT_APPLICATION: &[&str] = &["Current_Application", "CurrentApplication"];
pub const CURRENT_APPLICATION_DETAILS: &[&str] =
    &["Current_Application_Details", "CurrentApplicationDetails"];
pub const CURRENT_APPLICANT_DETAILS: &[&str] =
    &["Current_Applicant_Details", "CurrentApplicantDetails"];
pub const GENERIC_BASIC: &[&str] = &["BasicDetails", "Header", "Customer", "CustomerDetails"];
pub const HOLDER_DETAILS: &[&str] = &["CAIS_Holder_Details", "HolderDetails"];
pub const HOLDER_PHONE_DETAILS: &[&str] = &["CAIS_Holder_Phone_Details", "HolderPhoneDetails"];
pub const HOLDER_ADDRESS_DETAILS: &[&str] =
    &["CAIS_Holder_Address_Details", "HolderAddressDetails"];

// Identity fields.
pub const FIRST_NAME: &[&str] = &["First_Name", "FirstName", "First_Name_Non_Normalized"];
pub const MIDDLE_NAME: &[&str] = &[
    "Middle_Name1",
    "Middle_Name",
    "MiddleName",
    "Middle_Name_1_Non_Normalized",
];
pub const LAST_NAME: &[&str] = &["Last_Name", "LastName", "Surname", "Surname_Non_Normalized"];
pub const FULL_NAME: &[&str] = &["Name", "FullName", "Full_Name", "CustomerName"];
pub const MOBILE: &[&str] = &[
    "MobilePhoneNumber",
    "Mobile_Telephone_Number",
    "Telephone_Number_Applicant_1st",
    "Telephone_Number",
    "Mobile",
    "Phone",
    "Contact",
];
pub const PAN: &[&str] = &["IncomeTaxPan", "Income_TAX_PAN", "PAN", "Pan", "pan"];

// Score.
pub const SCORE_NODE: &[&str] = &["SCORE", "ScoreDetails"];
pub const SCORE_VALUE: &[&str] = &["BureauScore", "Score", "Value"];
pub const BASIC_SCORE: &[&str] = &["CreditScore", "Score", "BureauScore"];

// Summary containers.
pub const CAIS_ACCOUNT: &[&str] = &["CAIS_Account", "CAISAccount"];
pub const CAIS_SUMMARY: &[&str] = &["CAIS_Summary", "CAISSummary"];
pub const CREDIT_ACCOUNT_SUMMARY: &[&str] = &["Credit_Account", "CreditAccount"];
pub const OUTSTANDING_BALANCE_SUMMARY: &[&str] =
    &["Total_Outstanding_Balance", "TotalOutstandingBalance"];
pub const TOTAL_CAPS_SUMMARY: &[&str] = &["TotalCAPS_Summary", "TotalCAPSSummary"];
pub const CAPS: &[&str] = &["CAPS"];
pub const CAPS_SUMMARY: &[&str] = &["CAPS_Summary", "CAPSSummary"];
pub const GENERIC_SUMMARY: &[&str] = &["ReportSummary", "Summary", "Overview"];

// Summary figures.
pub const TOTAL_ACCOUNTS: &[&str] = &["CreditAccountTotal", "TotalAccounts", "Total"];
pub const ACTIVE_ACCOUNTS: &[&str] = &["CreditAccountActive", "ActiveAccounts", "Active"];
pub const CLOSED_ACCOUNTS: &[&str] = &["CreditAccountClosed", "ClosedAccounts", "Closed"];
pub const SUMMARY_BALANCE: &[&str] = &["Outstanding_Balance_All", "CurrentBalance", "Balance"];
pub const SECURED_AMOUNT: &[&str] = &["Outstanding_Balance_Secured", "SecuredAmount", "Secured"];
pub const UNSECURED_AMOUNT: &[&str] =
    &["Outstanding_Balance_UnSecured", "UnsecuredAmount", "Unsecured"];
pub const ENQUIRIES_LAST_7_DAYS: &[&str] = &[
    "TotalCAPSLast7Days",
    "CAPSLast7Days",
    "EnquiriesLast7Days",
    "Enquiries7Days",
    "Enquiries",
];

// Account containers.
pub const ACCOUNT_DETAILS: &[&str] = &["CAIS_Account_DETAILS", "CAIS_Account_Details"];
pub const GENERIC_ACCOUNT_CONTAINER: &[&str] = &["CreditAccounts", "Accounts", "AccountList"];
pub const GENERIC_ACCOUNT_ITEM: &[&str] = &["Account", "Accounts", "AccountList"];
/// Lowercased substring for the last-resort scan of the root's own keys.
pub const ACCOUNT_KEY_NEEDLE: &str = "account";

// Account fields.
pub const PORTFOLIO_TYPE: &[&str] = &["Portfolio_Type", "PortfolioType"];
pub const ACCOUNT_TYPE: &[&str] = &["Account_Type", "AccountType", "Type"];
pub const PROVIDER: &[&str] = &["Subscriber_Name", "Bank", "Provider", "Lender"];
pub const ACCOUNT_NUMBER: &[&str] = &["Account_Number", "AccountNumber", "AcctNo", "AccountNo"];
pub const AMOUNT_OVERDUE: &[&str] = &["Amount_Past_Due", "AmountOverdue", "Overdue", "PastDue"];
pub const CURRENT_BALANCE: &[&str] = &["Current_Balance", "CurrentBalance", "Balance", "Outstanding"];
pub const ACCOUNT_STATUS: &[&str] = &["Account_Status", "AccountStatus", "Status"];
pub const ADDRESSES: &[&str] = &["Addresses", "Address"];
pub const ADDRESS_ITEM: &[&str] = &["Address"];
pub const ADDRESS_PARTS: &[&[&str]] = &[
    &["First_Line_Of_Address_non_normalized", "AddressLine1"],
    &["Second_Line_Of_Address_non_normalized", "AddressLine2"],
    &["Third_Line_Of_Address_non_normalized", "AddressLine3"],
    &["Fifth_Line_Of_Address_non_normalized", "AddressLine5"],
    &["City_non_normalized", "City"],
    &["State_non_normalized", "State"],
    &["ZIP_Postal_Code_non_normalized", "PostalCode", "Pincode"],
];
