use bureau_ingest::experian::ExtractOptions;
use bureau_ingest::types::{AccountStatus, AccountType};
use bureau_ingest::{ingest_report, parse_report, IngestError};

fn parse(xml: &str) -> bureau_ingest::types::NormalizedReport {
    parse_report(xml, "report.xml", &ExtractOptions::default()).expect("report should parse")
}

#[test]
fn test_minimal_applicant_report() {
    let xml = r#"
    <INProfileResponse>
        <Current_Application>
            <Current_Application_Details>
                <Current_Applicant_Details First_Name="Jane" Last_Name="Doe"/>
            </Current_Application_Details>
        </Current_Application>
        <SCORE><BureauScore>720</BureauScore></SCORE>
        <CAIS_Account>
            <CAIS_Account_DETAILS>
                <Account_Number/>
                <Current_Balance/>
            </CAIS_Account_DETAILS>
            <CAIS_Account_DETAILS>
                <Account_Number>123</Account_Number>
                <Current_Balance>5,000</Current_Balance>
            </CAIS_Account_DETAILS>
        </CAIS_Account>
    </INProfileResponse>"#;

    let report = parse(xml);
    assert_eq!(report.basic_details.name, "Jane Doe");
    assert_eq!(report.basic_details.credit_score, Some(720));
    assert_eq!(report.accounts.len(), 1);
    assert_eq!(report.accounts[0].account_number, "123");
    assert_eq!(report.accounts[0].type_, AccountType::Other);
    assert_eq!(report.accounts[0].status, AccountStatus::Unknown);
    assert_eq!(report.summary.total_accounts, 1);
    assert_eq!(report.summary.current_balance, 5000.0);
}

#[test]
fn test_unclosed_tag_is_parse_error() {
    let err = parse_report("<INProfileResponse><SCORE>", "report.xml", &ExtractOptions::default())
        .unwrap_err();
    assert!(matches!(err, IngestError::Parse(_)), "got {err:?}");
    assert!(err.to_string().starts_with("XML parse error: "));

    let err = parse_report("", "report.xml", &ExtractOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::Parse(_)), "got {err:?}");
}

#[test]
fn test_blank_file_name_is_validation_error() {
    let err = parse_report("<Report/>", "   ", &ExtractOptions::default()).unwrap_err();
    assert_eq!(err, IngestError::Validation("File name is required".to_string()));
}

#[test]
fn test_pan_is_uppercased() {
    let report = parse("<Report><BasicDetails><PAN>abcde1234f</PAN></BasicDetails></Report>");
    assert_eq!(report.basic_details.pan, "ABCDE1234F");

    let report = parse("<Report><BasicDetails><pan>pqrsd6789z</pan></BasicDetails></Report>");
    assert_eq!(report.basic_details.pan, "PQRSD6789Z");

    let report = parse("<Report><BasicDetails><PAN>ABC123</PAN></BasicDetails></Report>");
    assert_eq!(report.basic_details.pan, "");
}

#[test]
fn test_first_and_last_name_preferred_over_full_name() {
    let report = parse(
        "<Report><BasicDetails>\
            <Name>Full Name</Name>\
            <FirstName>Jane</FirstName>\
            <LastName>Doe</LastName>\
        </BasicDetails></Report>",
    );
    assert_eq!(report.basic_details.name, "Jane Doe");
}

#[test]
fn test_attributed_account_wrapper_keeps_its_accounts() {
    let report = parse(
        r#"<Report><Accounts count="2">
            <Card><AccountNumber>1</AccountNumber></Card>
            <Loan><AccountNumber>2</AccountNumber></Loan>
        </Accounts></Report>"#,
    );
    let numbers: Vec<&str> = report
        .accounts
        .iter()
        .map(|a| a.account_number.as_str())
        .collect();
    assert_eq!(numbers, vec!["1", "2"]);
    assert_eq!(report.summary.total_accounts, 2);
}

#[test]
fn test_content_outside_root_is_parse_error() {
    for xml in ["<Report/>garbage here", "<Report/><Report/>", "junk<Report/>"] {
        let err = parse_report(xml, "report.xml", &ExtractOptions::default()).unwrap_err();
        assert!(matches!(err, IngestError::Parse(_)), "{xml}: got {err:?}");
    }
}

#[test]
fn test_provider_only_account_is_retained() {
    let report = parse(
        "<Report><Accounts><Account><Provider>ABC Bank</Provider></Account></Accounts></Report>",
    );
    assert_eq!(report.accounts.len(), 1);
    let account = &report.accounts[0];
    assert_eq!(account.provider, "ABC Bank");
    assert_eq!(account.account_number, "");
    assert_eq!(account.current_balance, 0.0);
    assert_eq!(account.amount_overdue, 0.0);
}

#[test]
fn test_total_accounts_defaults_to_retained_count() {
    let accounts = "<Accounts>\
        <Account><AccountNumber>A1</AccountNumber><CurrentBalance>100</CurrentBalance></Account>\
        <Account><AccountNumber>A2</AccountNumber><CurrentBalance>200</CurrentBalance></Account>\
        <Account><AccountNumber>A3</AccountNumber><CurrentBalance>300</CurrentBalance></Account>\
        <Account><AccountNumber></AccountNumber><CurrentBalance>0</CurrentBalance></Account>\
    </Accounts>";

    let report = parse(&format!("<Report>{accounts}</Report>"));
    assert_eq!(report.accounts.len(), 3);
    assert_eq!(report.summary.total_accounts, 3);
    assert_eq!(report.summary.current_balance, 600.0);

    let report = parse(&format!(
        "<Report><ReportSummary><TotalAccounts>7</TotalAccounts></ReportSummary>{accounts}</Report>"
    ));
    assert_eq!(report.summary.total_accounts, 7);
}

#[test]
fn test_identity_fields_fall_back_independently() {
    let xml = r#"
    <INProfileResponse>
        <Current_Application>
            <Current_Application_Details>
                <Current_Applicant_Details>
                    <IncomeTaxPan>not-a-pan</IncomeTaxPan>
                </Current_Applicant_Details>
            </Current_Application_Details>
        </Current_Application>
        <CAIS_Account>
            <CAIS_Account_DETAILS>
                <Subscriber_Name>ABC Bank</Subscriber_Name>
                <CAIS_Holder_Details>
                    <Surname_Non_Normalized>HOLDER</Surname_Non_Normalized>
                    <Income_TAX_PAN>abcde1234f</Income_TAX_PAN>
                </CAIS_Holder_Details>
                <CAIS_Holder_Phone_Details>
                    <Telephone_Number>09812345678</Telephone_Number>
                </CAIS_Holder_Phone_Details>
            </CAIS_Account_DETAILS>
        </CAIS_Account>
        <BasicDetails>
            <Name>Generic   Person</Name>
            <Mobile>1234</Mobile>
        </BasicDetails>
    </INProfileResponse>"#;

    let basic = parse(xml).basic_details;
    // Generic header outranks the account holder for names only.
    assert_eq!(basic.name, "Generic Person");
    assert_eq!(basic.mobile, "9812345678");
    assert_eq!(basic.pan, "ABCDE1234F");
}

#[test]
fn test_holder_name_used_when_nothing_else_has_one() {
    let xml = "<INProfileResponse><CAIS_Account><CAIS_Account_DETAILS>\
        <Account_Number>1</Account_Number>\
        <CAIS_Holder_Details>\
            <First_Name_Non_Normalized>ASHA</First_Name_Non_Normalized>\
            <Surname_Non_Normalized>RAO</Surname_Non_Normalized>\
        </CAIS_Holder_Details>\
    </CAIS_Account_DETAILS></CAIS_Account></INProfileResponse>";

    assert_eq!(parse(xml).basic_details.name, "ASHA RAO");
}

#[test]
fn test_namespace_prefixes_are_ignored() {
    let xml = r#"<ns2:INProfileResponse xmlns:ns2="urn:experian:inprofile">
        <ns2:SCORE><ns2:BureauScore>801</ns2:BureauScore></ns2:SCORE>
    </ns2:INProfileResponse>"#;

    assert_eq!(parse(xml).basic_details.credit_score, Some(801));
}

#[test]
fn test_score_rounding_and_range() {
    let report = parse("<Report><SCORE><BureauScore>741.6</BureauScore></SCORE></Report>");
    assert_eq!(report.basic_details.credit_score, Some(742));

    // The dedicated score wins even when it is out of range; it is then dropped.
    let report = parse(
        "<Report><SCORE><BureauScore>950</BureauScore></SCORE>\
         <BasicDetails><CreditScore>700</CreditScore></BasicDetails></Report>",
    );
    assert_eq!(report.basic_details.credit_score, None);

    let report = parse("<Report><BasicDetails><CreditScore>700</CreditScore></BasicDetails></Report>");
    assert_eq!(report.basic_details.credit_score, Some(700));
}

#[test]
fn test_negative_amounts_floor_at_zero() {
    let report = parse(
        "<Report><Accounts><Account>\
            <AccountNumber>N1</AccountNumber>\
            <CurrentBalance>-500</CurrentBalance>\
            <AmountOverdue>abc</AmountOverdue>\
        </Account></Accounts>\
        <ReportSummary><SecuredAmount>-10</SecuredAmount></ReportSummary></Report>",
    );
    assert_eq!(report.accounts[0].current_balance, 0.0);
    assert_eq!(report.accounts[0].amount_overdue, 0.0);
    assert_eq!(report.summary.secured_amount, 0.0);
}

#[test]
fn test_unrecognized_document_yields_defaults() {
    let report = parse("<Something><Else>1</Else></Something>");
    assert_eq!(report.file_name, "report.xml");
    assert_eq!(report.basic_details, Default::default());
    assert_eq!(report.summary, Default::default());
    assert!(report.accounts.is_empty());
}

#[tokio::test]
async fn test_ingest_report_matches_sync_parse() {
    let xml = "<Report><BasicDetails><Name>Jane Doe</Name></BasicDetails></Report>";
    let sync = parse(xml);
    let async_report = ingest_report(
        xml.to_string(),
        "report.xml".to_string(),
        ExtractOptions::default(),
    )
    .await
    .unwrap();
    assert_eq!(sync, async_report);

    let err = ingest_report(
        "<Report>".to_string(),
        "report.xml".to_string(),
        ExtractOptions::default(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, IngestError::Parse(_)));
}
