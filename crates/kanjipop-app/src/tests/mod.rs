mod deck_tests;
